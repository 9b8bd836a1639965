//! # Duration Parser
//!
//! Parses `<years>y<months>m` notation into a total number of months.
//!
//! ## Parsing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "1Y6m"                                                                 │
//! │     │ lowercase, trim                                                   │
//! │     ▼                                                                   │
//! │  "1y6m" ── first 'y' ──► years = int("1")   else InvalidYearFormat      │
//! │     │                                                                   │
//! │     ▼ rest after 'y'                                                    │
//! │  "6m"   ── first 'm' ──► months = int("6")  else InvalidMonthFormat     │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  1 × 12 + 6 = 18         total <= 0 → NonPositiveDuration               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unlike [`parse_amount`](crate::parse_amount), this parser FAILS on bad
//! input. Loan terms and horizons must be valid before the simulation runs.
//!
//! ## Integer Segments
//! A segment is an integer when, after leading whitespace, it starts with an
//! optional sign and at least one digit. Anything after the digits is
//! ignored: `"2 y"` → 24, `"1.5y"` → 12. Digit runs too large for `i64` are
//! rejected as invalid format.

use crate::error::{DurationError, DurationResult};
use crate::MONTHS_PER_YEAR;

/// Parses a duration into total months.
///
/// ## Errors
/// - [`DurationError::InvalidYearFormat`] - text before `y` is not an integer
/// - [`DurationError::InvalidMonthFormat`] - text before `m` is not an integer
/// - [`DurationError::NonPositiveDuration`] - total is zero or negative
///
/// A digit run too large for `i64` counts as not an integer, so it reports
/// `InvalidYearFormat` or `InvalidMonthFormat` for its segment.
///
/// ## Example
/// ```rust
/// use rentobuy_core::{parse_duration, DurationError};
///
/// assert_eq!(parse_duration("1y6m").unwrap(), 18);
/// assert_eq!(parse_duration("2y").unwrap(), 24);
/// assert_eq!(parse_duration("18m").unwrap(), 18);
///
/// assert!(matches!(
///     parse_duration("0y0m"),
///     Err(DurationError::NonPositiveDuration { .. })
/// ));
/// assert!(matches!(
///     parse_duration("xy"),
///     Err(DurationError::InvalidYearFormat { .. })
/// ));
/// ```
pub fn parse_duration(duration: &str) -> DurationResult<i64> {
    let lowered = duration.to_lowercase();
    let mut remaining = lowered.trim();

    let mut years = 0;
    if let Some((year_text, rest)) = remaining.split_once('y') {
        years = parse_int_prefix(year_text).ok_or_else(|| DurationError::InvalidYearFormat {
            segment: year_text.to_string(),
        })?;
        remaining = rest;
    }

    let mut months = 0;
    if let Some((month_text, _)) = remaining.split_once('m') {
        months = parse_int_prefix(month_text).ok_or_else(|| DurationError::InvalidMonthFormat {
            segment: month_text.to_string(),
        })?;
    }

    let total_months = years.saturating_mul(MONTHS_PER_YEAR).saturating_add(months);
    if total_months <= 0 {
        return Err(DurationError::NonPositiveDuration { total_months });
    }

    Ok(total_months)
}

/// Parses the leading integer of `text`, ignoring leading whitespace and
/// anything after the digits.
fn parse_int_prefix(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digit_len = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digit_len == 0 {
        return None;
    }

    text[..sign_len + digit_len].parse().ok()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_and_months() {
        assert_eq!(parse_duration("1y6m").unwrap(), 18);
        assert_eq!(parse_duration("2y").unwrap(), 24);
        assert_eq!(parse_duration("24m").unwrap(), 24);
        assert_eq!(parse_duration("18m").unwrap(), 18);
        assert_eq!(parse_duration("30y").unwrap(), 360);
        assert_eq!(parse_duration("0y3m").unwrap(), 3);
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(parse_duration("  1Y6M ").unwrap(), 18);
        assert_eq!(parse_duration("2 y").unwrap(), 24);
        assert_eq!(parse_duration("1y 6m").unwrap(), 18);
    }

    #[test]
    fn test_lenient_integer_segments() {
        // Trailing text after the digits is ignored
        assert_eq!(parse_duration("1.5y").unwrap(), 12);
        assert_eq!(parse_duration("1y2x3m").unwrap(), 14);
        // Text after the month marker is ignored
        assert_eq!(parse_duration("6mo").unwrap(), 6);
    }

    #[test]
    fn test_negative_segments_are_summed() {
        assert_eq!(parse_duration("-1y18m").unwrap(), 6);
        assert_eq!(
            parse_duration("1y-12m"),
            Err(DurationError::NonPositiveDuration { total_months: 0 })
        );
    }

    #[test]
    fn test_non_positive() {
        assert_eq!(
            parse_duration("0y0m"),
            Err(DurationError::NonPositiveDuration { total_months: 0 })
        );
        // No 'y' and no 'm' means 0 years and 0 months
        assert_eq!(
            parse_duration(""),
            Err(DurationError::NonPositiveDuration { total_months: 0 })
        );
        assert_eq!(
            parse_duration("12"),
            Err(DurationError::NonPositiveDuration { total_months: 0 })
        );
    }

    #[test]
    fn test_invalid_year() {
        assert_eq!(
            parse_duration("ay"),
            Err(DurationError::InvalidYearFormat {
                segment: "a".to_string()
            })
        );
        assert!(matches!(
            parse_duration("xy"),
            Err(DurationError::InvalidYearFormat { .. })
        ));
        assert!(matches!(
            parse_duration("y6m"),
            Err(DurationError::InvalidYearFormat { .. })
        ));
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(
            parse_duration("1ym"),
            Err(DurationError::InvalidMonthFormat {
                segment: String::new()
            })
        );
        assert!(matches!(
            parse_duration("sixm"),
            Err(DurationError::InvalidMonthFormat { .. })
        ));
    }

    #[test]
    fn test_year_error_wins_over_month_error() {
        assert!(matches!(
            parse_duration("ayxm"),
            Err(DurationError::InvalidYearFormat { .. })
        ));
    }

    #[test]
    fn test_overflowing_segments() {
        assert!(matches!(
            parse_duration("99999999999999999999y"),
            Err(DurationError::InvalidYearFormat { .. })
        ));
        // Fits i64 but overflows once converted to months
        assert_eq!(parse_duration("9223372036854775807y").unwrap(), i64::MAX);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  7abc"), Some(7));
        assert_eq!(parse_int_prefix("+3"), Some(3));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("abc"), None);
    }
}
