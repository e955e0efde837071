//! Monthly interest calculation
//!
//! Converts an annual percentage rate into one month's interest on a balance.

use crate::types::MONTHS_IN_YEAR;

/// Interest earned by `current_balance` over one month
///
/// The annual rate is a percentage number (`5.0` means 5%). It is converted
/// to a decimal and divided evenly across the twelve months:
/// `current_balance * ((annual / 100) / 12)`.
///
/// Zero and negative rates are accepted and yield zero or negative interest.
/// NaN and infinity propagate.
pub fn monthly_interest(current_balance: f64, annual_interest_rate_percent: f64) -> f64 {
    let monthly_rate = (annual_interest_rate_percent / 100.0) / MONTHS_IN_YEAR as f64;
    current_balance * monthly_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::five_percent(1000.0, 5.0, 1000.0 * (0.05 / 12.0))]
    #[case::twelve_percent(1000.0, 12.0, 10.0)]
    #[case::zero_rate(1000.0, 0.0, 0.0)]
    #[case::zero_balance(0.0, 5.0, 0.0)]
    #[case::negative_rate(1200.0, -6.0, -6.0)]
    #[case::negative_balance(-1200.0, 6.0, -6.0)]
    fn test_monthly_interest(#[case] balance: f64, #[case] rate: f64, #[case] expected: f64) {
        assert_relative_eq!(monthly_interest(balance, rate), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_monthly_interest_is_idempotent() {
        let first = monthly_interest(1234.56, 3.75);
        let second = monthly_interest(1234.56, 3.75);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn test_monthly_interest_propagates_nan() {
        assert!(monthly_interest(f64::NAN, 5.0).is_nan());
        assert!(monthly_interest(1000.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_monthly_interest_propagates_infinity() {
        assert_eq!(monthly_interest(f64::INFINITY, 5.0), f64::INFINITY);
    }
}
