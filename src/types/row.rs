//! Year-by-year output record

/// One year of a projection run
///
/// Produced once per year and handed straight to the sinks. Values are kept
/// at full `f64` precision; only display formatting rounds them.
///
/// For every row `closing_balance == opening_balance + deposited_amount +
/// interest_earned`, up to floating-point error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearRow {
    /// Year number, starting at 1
    pub year: i32,

    /// Balance carried in from the previous year (or the initial investment)
    pub opening_balance: f64,

    /// Total deposited during the year (zero when deposits are excluded)
    pub deposited_amount: f64,

    /// Sum of the twelve monthly interest amounts
    pub interest_earned: f64,

    /// Balance after the twelfth month
    pub closing_balance: f64,
}
