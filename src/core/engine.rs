//! Projection engine
//!
//! This module provides the `ProjectionEngine` that drives the year/month
//! compounding loop and the `YearRows` iterator it produces.
//!
//! The engine enforces the accrual rules of a projection run:
//! - Interest compounds monthly, twelve times per year
//! - The month's interest is computed on the balance before that month's deposit
//! - The deposit is added to the balance before the interest is
//! - No intermediate rounding; balances keep full `f64` precision

use crate::core::interest::monthly_interest;
use crate::io::sink::SinkSet;
use crate::io::table;
use crate::types::{ProjectionParameters, YearRow, MONTHS_IN_YEAR};
use std::iter::FusedIterator;

/// Projection engine
///
/// Holds the parameters of one scenario run. Every call to [`project`]
/// starts a fresh run from the initial investment, so the engine itself
/// carries no state between runs.
///
/// [`project`]: ProjectionEngine::project
#[derive(Debug, Clone, Copy)]
pub struct ProjectionEngine {
    params: ProjectionParameters,
}

impl ProjectionEngine {
    /// Create a new ProjectionEngine for the given run parameters
    pub fn new(params: ProjectionParameters) -> Self {
        ProjectionEngine { params }
    }

    /// Start a projection run
    ///
    /// Returns a lazy iterator yielding one row per year. The iterator owns
    /// the running balance; once consumed it cannot be restarted, but
    /// calling `project` again begins a new, identical run.
    pub fn project(&self) -> YearRows {
        project(self.params)
    }

    /// Run the projection and write its table to every sink
    ///
    /// Writes the column header, the separator, one line per year and a
    /// trailing blank line. Each line goes to all sinks before the next
    /// line is produced. The scenario label is the caller's to write.
    ///
    /// # Returns
    ///
    /// The rows that were written, in year order.
    pub fn emit(&self, sinks: &mut SinkSet<'_>) -> Vec<YearRow> {
        sinks.write_line(table::HEADER);
        sinks.write_line(&table::separator());

        let mut rows = Vec::with_capacity(self.project().len());
        for row in self.project() {
            sinks.write_line(&table::format_row(&row));
            rows.push(row);
        }

        sinks.write_line("");

        log::debug!(
            "Emitted {} year rows (deposits included: {})",
            rows.len(),
            self.params.include_monthly_deposits
        );

        rows
    }
}

/// Start a projection run for the given parameters
///
/// Zero or negative `number_of_years` yields an empty sequence.
pub fn project(params: ProjectionParameters) -> YearRows {
    YearRows {
        params,
        current_balance: params.initial_investment,
        next_year: 1,
    }
}

/// Lazy sequence of yearly rows for one projection run
///
/// Created by [`project`] or [`ProjectionEngine::project`].
#[derive(Debug, Clone)]
pub struct YearRows {
    params: ProjectionParameters,
    current_balance: f64,
    next_year: i64,
}

impl YearRows {
    /// Compound one year, advancing the running balance
    fn compound_year(&mut self, year: i32) -> YearRow {
        let opening_balance = self.current_balance;
        let mut interest_earned = 0.0;

        for _ in 0..MONTHS_IN_YEAR {
            let month_interest = monthly_interest(
                self.current_balance,
                self.params.annual_interest_rate_percent,
            );
            interest_earned += month_interest;

            // Deposit lands before the interest is credited
            if self.params.include_monthly_deposits {
                self.current_balance += self.params.monthly_deposit;
            }
            self.current_balance += month_interest;
        }

        YearRow {
            year,
            opening_balance,
            deposited_amount: self.params.yearly_deposit(),
            interest_earned,
            closing_balance: self.current_balance,
        }
    }

    fn remaining(&self) -> usize {
        let last_year = i64::from(self.params.number_of_years);
        if self.next_year > last_year {
            0
        } else {
            (last_year - self.next_year + 1) as usize
        }
    }
}

impl Iterator for YearRows {
    type Item = YearRow;

    fn next(&mut self) -> Option<YearRow> {
        if self.next_year > i64::from(self.params.number_of_years) {
            return None;
        }

        // Bounded by number_of_years, so it fits back into i32
        let year = self.next_year as i32;
        self.next_year += 1;
        Some(self.compound_year(year))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for YearRows {}

impl FusedIterator for YearRows {}
