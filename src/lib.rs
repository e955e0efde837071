//! Investment Calculator Library
//! # Overview
//!
//! This library projects compound-interest growth of an investment, year by
//! year, with and without recurring monthly deposits, and writes the result
//! as a formatted table to any number of line sinks.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (ProjectionParameters, YearRow, etc.)
//! - [`cli`] - CLI arguments parsing and interactive prompting
//! - [`core`] - Business logic components:
//!   - [`core::interest`] - Monthly interest on a balance
//!   - [`core::engine`] - The year/month compounding loop
//!   - [`core::traits`] - The `Sink` abstraction for output destinations
//! - [`io`] - Table formatting, sinks and CSV export
//! - [`summary`] - A full session: both scenarios, terminal and file in lockstep
//!
//! # Compounding Rules
//!
//! - Interest is compounded monthly at `annual_rate / 100 / 12`
//! - Each month's interest is computed on the balance at the start of the month
//! - When deposits are included, the deposit is added before the interest
//! - Balances are never rounded between months; only display rounds to 2 places
//!
//! # Scenarios
//!
//! - **No Monthly Deposits**: pure compound growth of the initial investment
//! - **With Monthly Deposits**: the same, plus the monthly deposit every month

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod summary;
pub mod types;

pub use crate::core::{monthly_interest, project, ProjectionEngine, Sink, YearRows};
pub use io::{FileSink, SinkSet, WriterSink};
pub use types::{InvestmentInputs, ProjectionError, ProjectionParameters, Scenario, YearRow};
