//! Projection input types
//!
//! This module defines the values a projection run is driven by: the four
//! user inputs, the two scenarios they are projected under, and the
//! parameters of a single scenario run.

/// Number of compounding periods (and deposits) per year
pub const MONTHS_IN_YEAR: i32 = 12;

/// Parameters for a single projection run
///
/// Immutable for the duration of one run. Values are not range-checked:
/// negative amounts, negative rates and non-positive year counts are all
/// accepted and simply produce unusual (or empty) tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParameters {
    /// Starting balance of the run
    pub initial_investment: f64,

    /// Amount added at the start of every month when deposits are included
    pub monthly_deposit: f64,

    /// Annual interest rate as a percentage number (`5.0` means 5%)
    pub annual_interest_rate_percent: f64,

    /// Number of years to project; zero or negative yields no rows
    pub number_of_years: i32,

    /// Whether `monthly_deposit` is added each month
    pub include_monthly_deposits: bool,
}

impl ProjectionParameters {
    /// Amount deposited over one full year of this run
    ///
    /// `monthly_deposit * 12` when deposits are included, otherwise zero.
    pub fn yearly_deposit(&self) -> f64 {
        if self.include_monthly_deposits {
            self.monthly_deposit * MONTHS_IN_YEAR as f64
        } else {
            0.0
        }
    }
}

/// The four values gathered from the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentInputs {
    pub initial_investment: f64,
    pub monthly_deposit: f64,
    pub annual_interest_rate_percent: f64,
    pub number_of_years: i32,
}

impl InvestmentInputs {
    /// Derive the parameters of one scenario run
    ///
    /// Both scenarios start from the same initial investment. The
    /// no-deposit scenario carries a monthly deposit of zero.
    pub fn scenario(&self, scenario: Scenario) -> ProjectionParameters {
        let (monthly_deposit, include_monthly_deposits) = match scenario {
            Scenario::NoMonthlyDeposits => (0.0, false),
            Scenario::WithMonthlyDeposits => (self.monthly_deposit, true),
        };

        ProjectionParameters {
            initial_investment: self.initial_investment,
            monthly_deposit,
            annual_interest_rate_percent: self.annual_interest_rate_percent,
            number_of_years: self.number_of_years,
            include_monthly_deposits,
        }
    }
}

/// One full projection run under a fixed deposit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    NoMonthlyDeposits,
    WithMonthlyDeposits,
}

impl Scenario {
    /// Both scenarios, in the order they are reported
    pub const ALL: [Scenario; 2] = [Scenario::NoMonthlyDeposits, Scenario::WithMonthlyDeposits];

    /// Label line written above the scenario's table
    pub fn label(self) -> &'static str {
        match self {
            Scenario::NoMonthlyDeposits => "--- Investment Summary (No Monthly Deposits) ---",
            Scenario::WithMonthlyDeposits => "--- Investment Summary (With Monthly Deposits) ---",
        }
    }

    /// Short identifier used in the CSV export
    pub fn key(self) -> &'static str {
        match self {
            Scenario::NoMonthlyDeposits => "no_deposits",
            Scenario::WithMonthlyDeposits => "with_deposits",
        }
    }
}
