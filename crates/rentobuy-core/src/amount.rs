//! # Amount Parser
//!
//! Parses free-text amounts typed into the calculator.
//!
//! ## Accepted Notation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input        Steps                                   Result            │
//! │  ──────────   ─────────────────────────────────────   ──────────        │
//! │  "1.5k"       suffix k → 1.5 × 1,000                   1500             │
//! │  "2M"         lowercase, suffix m → 2 × 1,000,000      2000000          │
//! │  "1b"         suffix b → 1 × 1,000,000,000             1000000000       │
//! │  "50%"        strip % (NOT divided by 100)             50               │
//! │  "5 k"        suffix k, inner text trimmed             5000             │
//! │  ""           empty                                    0                │
//! │  "abc"        no number                                0                │
//! │  "$1,200"     `$` is not a number                      0                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Never Fails
//! Unparseable text becomes `0`. Numeric entry fields must stay usable while
//! the user is halfway through typing.
//!
//! ## Number Prefix
//! After the suffix is removed, the longest leading decimal number is used
//! and anything after it is ignored: `"1,200"` → `1`, `"1bk"` → `1 × 1,000`.

use crate::{BILLION, MILLION, THOUSAND};

/// Parses an amount, returning `0.0` for anything unparseable.
///
/// ## Rules (in order)
/// 1. Lowercase and trim
/// 2. Empty → `0`
/// 3. Strip ONE trailing `%`, trim again
/// 4. Check the LAST character only: `k`, then `m`, then `b`
/// 5. Parse the leading number of what remains, multiply
///
/// ## Example
/// ```rust
/// use rentobuy_core::parse_amount;
///
/// assert_eq!(parse_amount("1.5k"), 1500.0);
/// assert_eq!(parse_amount("2M"), 2_000_000.0);
/// assert_eq!(parse_amount("50%"), 50.0);
/// assert_eq!(parse_amount(""), 0.0);
/// assert_eq!(parse_amount("abc"), 0.0);
/// ```
pub fn parse_amount(input: &str) -> f64 {
    let lowered = input.to_lowercase();
    let trimmed = lowered.trim();

    if trimmed.is_empty() {
        return 0.0;
    }

    let without_percent = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    let (number, multiplier) = split_multiplier(without_percent);

    match parse_number_prefix(number.trim()) {
        Some(value) => value * multiplier,
        None => 0.0,
    }
}

/// Removes a single trailing `k`, `m` or `b` and returns its multiplier.
///
/// Only the final character is looked at, and only one is consumed:
/// `"5bm"` strips the `m` and leaves `"5b"`.
fn split_multiplier(text: &str) -> (&str, f64) {
    if let Some(rest) = text.strip_suffix('k') {
        (rest, THOUSAND)
    } else if let Some(rest) = text.strip_suffix('m') {
        (rest, MILLION)
    } else if let Some(rest) = text.strip_suffix('b') {
        (rest, BILLION)
    } else {
        (text, 1.0)
    }
}

/// Parses the longest leading decimal number of `text`.
///
/// Grammar: `[+-] digits [. digits] [(e|E) [+-] digits]`, where at least one
/// digit must appear before or after the point. An exponent without digits
/// is not part of the number (`"1e"` → `1`).
fn parse_number_prefix(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    end += count_digits(&bytes[end..]);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = count_digits(&bytes[end + 1..]);
        if mantissa_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("\t\n"), 0.0);
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_amount("42"), 42.0);
        assert_eq!(parse_amount("  3.75  "), 3.75);
        assert_eq!(parse_amount("-2"), -2.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
        assert_eq!(parse_amount("+8"), 8.0);
    }

    #[test]
    fn test_suffix_multipliers() {
        assert_eq!(parse_amount("7K"), 7000.0);
        assert_eq!(parse_amount("1.5k"), 1500.0);
        assert_eq!(parse_amount("2.5m"), 2_500_000.0);
        assert_eq!(parse_amount("2M"), 2_000_000.0);
        assert_eq!(parse_amount("3b"), 3_000_000_000.0);
        assert_eq!(parse_amount("-4k"), -4000.0);
        assert_eq!(parse_amount("5 k"), 5000.0);
    }

    #[test]
    fn test_percent_is_stripped_not_scaled() {
        assert_eq!(parse_amount("10%"), 10.0);
        assert_eq!(parse_amount("50%"), 50.0);
        assert_eq!(parse_amount("3.5 %"), 3.5);
        // Only one trailing percent sign is removed; the number prefix still parses
        assert_eq!(parse_amount("5%%"), 5.0);
        // Percent is stripped before the suffix check
        assert_eq!(parse_amount("2k%"), 2000.0);
    }

    #[test]
    fn test_only_last_character_is_a_suffix() {
        // "1bk": k is consumed, "1b" parses as 1
        assert_eq!(parse_amount("1bk"), 1000.0);
        // "5bm": m is consumed, "5b" parses as 5
        assert_eq!(parse_amount("5bm"), 5_000_000.0);
        assert_eq!(parse_amount("k"), 0.0);
    }

    #[test]
    fn test_unparseable_degrades_to_zero() {
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("infinity"), 0.0);
    }

    #[test]
    fn test_display_output_does_not_round_trip() {
        // Formatter output is one-way: $ and commas are not understood
        assert_eq!(parse_amount("$1,200"), 0.0);
        assert_eq!(parse_amount("1,200"), 1.0);
        assert_eq!(parse_amount("-$1,234,567.9"), 0.0);
    }

    #[test]
    fn test_number_prefix() {
        assert_eq!(parse_number_prefix("12abc"), Some(12.0));
        assert_eq!(parse_number_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_number_prefix("1e"), Some(1.0));
        assert_eq!(parse_number_prefix("1e+"), Some(1.0));
        assert_eq!(parse_number_prefix("2.5e-1x"), Some(0.25));
        assert_eq!(parse_number_prefix("-.5"), Some(-0.5));
        assert_eq!(parse_number_prefix("e5"), None);
        assert_eq!(parse_number_prefix(""), None);
    }
}
