//! Benchmark suite for the projection loop
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! The loop is O(years * 12); horizons range from a typical 10-year plan to
//! a 1,000-year stress run. Emission benchmarks add table formatting and the
//! sink fan-out on top of the raw loop.

use investment_calculator::io::{SinkSet, WriterSink};
use investment_calculator::{project, InvestmentInputs, ProjectionEngine, Scenario};
use std::io;

fn main() {
    divan::main();
}

fn inputs(years: i32) -> InvestmentInputs {
    InvestmentInputs {
        initial_investment: 1000.0,
        monthly_deposit: 50.0,
        annual_interest_rate_percent: 5.0,
        number_of_years: years,
    }
}

/// Raw compounding loop, rows consumed without formatting
#[divan::bench(args = [10, 100, 1000])]
fn project_with_deposits(years: i32) -> f64 {
    let params = inputs(divan::black_box(years)).scenario(Scenario::WithMonthlyDeposits);
    project(params).map(|row| row.closing_balance).sum()
}

/// Full table emission to two in-memory sinks
#[divan::bench(args = [10, 100, 1000])]
fn emit_to_two_sinks(years: i32) -> usize {
    let params = inputs(divan::black_box(years)).scenario(Scenario::WithMonthlyDeposits);
    let engine = ProjectionEngine::new(params);
    let mut sinks = SinkSet::new();
    sinks.push(WriterSink::new("first", Vec::new()));
    sinks.push(WriterSink::new("second", io::sink()));

    let rows = engine.emit(&mut sinks);
    sinks.finish().expect("In-memory sinks cannot fail");
    rows.len()
}
