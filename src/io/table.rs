//! Table line formatting for the investment summary
//!
//! All functions are pure (no I/O) so every sink receives byte-identical
//! lines.

use crate::types::YearRow;

/// Column header line
pub const HEADER: &str =
    "Year\t\tOpening Balance\tDeposited Amount\tInterest Earned\tClosing Balance";

/// Width of the separator line under the header
pub const SEPARATOR_WIDTH: usize = 80;

/// Separator line written under the header
pub fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Format one year row
///
/// The year is printed as an integer; every amount is fixed-point with two
/// decimal digits, rounded half-to-even on the exact binary value (so
/// `0.125` prints as `0.12`). Tab spacing lines the values up under the
/// header.
pub fn format_row(row: &YearRow) -> String {
    format!(
        "{}\t\t{:.2}\t\t{:.2}\t\t\t{:.2}\t\t{:.2}",
        row.year,
        row.opening_balance,
        row.deposited_amount,
        row.interest_earned,
        row.closing_balance
    )
}
