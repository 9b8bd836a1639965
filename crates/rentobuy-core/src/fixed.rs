//! # Fixed-Point Rendering
//!
//! Renders an `f64` with a fixed number of decimal digits.
//!
//! ## Rounding Rule: Half Away From Zero, On The Exact Value
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rust's `format!("{:.2}", x)` rounds exact ties to EVEN:               │
//! │    0.125 → "0.12"                                                       │
//! │                                                                         │
//! │  The calculator rounds exact ties AWAY FROM ZERO:                       │
//! │    0.125 → "0.13"     -0.125 → "-0.13"                                  │
//! │                                                                         │
//! │  Only TRUE ties are affected. Most decimal literals are not exactly    │
//! │  representable, so the stored value decides:                           │
//! │    1.005  is stored as 1.00499999999999989... → "1.00"                  │
//! │    2.675  is stored as 2.67499999999999982... → "2.67"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## How
//! The magnitude is printed with [`GUARD_DIGITS`] extra digits. The first
//! extra digit of that expansion decides the rounding, then the carry is
//! propagated by hand. A double that is not a tie differs from the nearest
//! tie well within the guard digits, so the guard expansion never rounds the
//! deciding digit.
//!
//! ## Non-finite Values
//! `NaN`, `Infinity` and `-Infinity` are returned as those words.

/// Extra digits printed past the requested precision before rounding.
const GUARD_DIGITS: usize = 25;

/// Renders `value` with exactly `digits` decimal digits.
///
/// Negative values keep their sign even when the rounded magnitude is zero
/// (`-0.001` → `"-0.00"`). Negative zero renders without a sign.
///
/// ## Example
/// ```rust
/// use rentobuy_core::fixed::to_fixed;
///
/// assert_eq!(to_fixed(3.1, 2), "3.10");
/// assert_eq!(to_fixed(0.125, 2), "0.13");
/// assert_eq!(to_fixed(-0.125, 2), "-0.13");
/// assert_eq!(to_fixed(2.5, 0), "3");
/// assert_eq!(to_fixed(f64::NAN, 1), "NaN");
/// ```
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let word = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return word.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let expanded = format!("{:.*}", digits + GUARD_DIGITS, value.abs());
    let (int_part, frac_part) = expanded
        .split_once('.')
        .unwrap_or((expanded.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|deciding| *deciding >= b'5');

    if round_up && !increment_digits(&mut kept) {
        kept.insert(0, b'1');
    }

    let split = kept.len() - digits;
    let int_digits: String = kept[..split].iter().map(|&b| b as char).collect();
    let frac_digits: String = kept[split..].iter().map(|&b| b as char).collect();

    if digits == 0 {
        format!("{sign}{int_digits}")
    } else {
        format!("{sign}{int_digits}.{frac_digits}")
    }
}

/// Adds one to the last ASCII digit, carrying left.
///
/// Returns `false` when the carry runs off the front (`"999"` → `"000"`),
/// meaning the caller must prepend a `1`.
fn increment_digits(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rendering() {
        assert_eq!(to_fixed(0.0, 1), "0.0");
        assert_eq!(to_fixed(3.1, 2), "3.10");
        assert_eq!(to_fixed(42.0, 0), "42");
        assert_eq!(to_fixed(1234.56, 1), "1234.6");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        // 0.25, 0.125 and 2.5 are exactly representable ties
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-0.25, 1), "-0.3");
        assert_eq!(to_fixed(0.375, 2), "0.38");
    }

    #[test]
    fn test_near_ties_follow_stored_value() {
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(2.675, 2), "2.67");
        assert_eq!(to_fixed(-1.005, 2), "-1.00");
    }

    #[test]
    fn test_carry_propagates() {
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(999.96, 1), "1000.0");
        assert_eq!(to_fixed(0.996, 2), "1.00");
        assert_eq!(to_fixed(9.5, 0), "10");
    }

    #[test]
    fn test_sign_handling() {
        assert_eq!(to_fixed(-3.14159, 2), "-3.14");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_large_values_render_all_digits() {
        assert_eq!(to_fixed(1e21, 1), "1000000000000000000000.0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn test_increment_digits() {
        let mut digits = b"129".to_vec();
        assert!(increment_digits(&mut digits));
        assert_eq!(digits, b"130");

        let mut digits = b"99".to_vec();
        assert!(!increment_digits(&mut digits));
        assert_eq!(digits, b"00");
    }
}
