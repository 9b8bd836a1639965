//! # Appreciation Rate Lists
//!
//! Parses a comma-separated list of yearly rates, e.g. `"3,4.5,-2"`.
//! The calculator applies the rates year by year, so order is kept and
//! duplicates and zeros are preserved.

use crate::amount::parse_amount;

/// Parses a comma-separated list of rates.
///
/// Each part goes through [`parse_amount`], so this never fails: a bad part
/// becomes `0` in its position. Empty input yields `[0.0]`.
///
/// ## Example
/// ```rust
/// use rentobuy_core::parse_appreciation_rates;
///
/// assert_eq!(parse_appreciation_rates(""), vec![0.0]);
/// assert_eq!(parse_appreciation_rates("3,5k,-2"), vec![3.0, 5000.0, -2.0]);
/// ```
pub fn parse_appreciation_rates(input: &str) -> Vec<f64> {
    let input = input.trim();
    if input.is_empty() {
        return vec![0.0];
    }

    let rates: Vec<f64> = input.split(',').map(parse_amount).collect();

    if rates.is_empty() {
        return vec![0.0];
    }

    rates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_appreciation_rates(""), vec![0.0]);
        assert_eq!(parse_appreciation_rates("   "), vec![0.0]);
    }

    #[test]
    fn test_single_rate() {
        assert_eq!(parse_appreciation_rates("3.5"), vec![3.5]);
        assert_eq!(parse_appreciation_rates("4%"), vec![4.0]);
    }

    #[test]
    fn test_multiple_rates_keep_order() {
        assert_eq!(parse_appreciation_rates("3,5k,-2"), vec![3.0, 5000.0, -2.0]);
        assert_eq!(parse_appreciation_rates("5, 4, 3"), vec![5.0, 4.0, 3.0]);
        assert_eq!(parse_appreciation_rates("3%, 3%, 0"), vec![3.0, 3.0, 0.0]);
    }

    #[test]
    fn test_bad_parts_become_zero() {
        assert_eq!(parse_appreciation_rates("3,abc,4"), vec![3.0, 0.0, 4.0]);
        assert_eq!(parse_appreciation_rates("1,,2"), vec![1.0, 0.0, 2.0]);
        assert_eq!(parse_appreciation_rates(","), vec![0.0, 0.0]);
    }
}
