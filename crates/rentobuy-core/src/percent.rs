//! # Percent Formatter

use crate::fixed::to_fixed;

/// Formats a value as a percent with exactly two decimals.
///
/// The value is already in percent units (`3.1` → `"3.10%"`). No grouping,
/// and negative values keep their sign. Exact ties round away from zero
/// (see [`to_fixed`]).
///
/// ## Example
/// ```rust
/// use rentobuy_core::format_percent;
///
/// assert_eq!(format_percent(3.1), "3.10%");
/// assert_eq!(format_percent(0.0), "0.00%");
/// assert_eq!(format_percent(-1.005), "-1.00%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{}%", to_fixed(value, 2))
}
