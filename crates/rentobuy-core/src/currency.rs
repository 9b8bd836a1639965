//! # Currency Formatter
//!
//! Renders amounts for display, either compact or full.
//!
//! ## Display Styles
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount           Compact (default)      Full                           │
//! │  ──────────────   ─────────────────      ───────────────────            │
//! │  999.4            999.4                  $999.4                         │
//! │  1500             1.5K                   $1,500.0                       │
//! │  2_500_000        2.5M                   $2,500,000.0                   │
//! │  -1234567.89      -1.2M                  -$1,234,567.9                  │
//! │                                                                         │
//! │  Compact has no currency symbol. Thresholds are checked on the          │
//! │  unrounded magnitude, so 999.96 renders as "1000.0", not "1.0K".        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## One-Way Formatting
//! The output is for display only. `parse_amount` does not understand `$`,
//! thousands separators, or the `K`/`M` suffixes the way they are emitted
//! here (`parse_amount("$1,200")` is `0`).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fixed::to_fixed;
use crate::{MILLION, THOUSAND};

// =============================================================================
// Currency Style
// =============================================================================

/// How an amount is rendered.
///
/// Serialized as `"compact"` / `"full"` so the web frontend can store the
/// user's "show full numbers" toggle directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyStyle {
    /// One decimal digit with a `K`/`M` suffix, no currency symbol.
    #[default]
    Compact,
    /// `$`-prefixed, comma-grouped, one decimal digit.
    Full,
}

impl CurrencyStyle {
    /// Maps the calculator's "full numbers" toggle to a style.
    #[inline]
    pub const fn from_full_numbers(full_numbers: bool) -> Self {
        if full_numbers {
            CurrencyStyle::Full
        } else {
            CurrencyStyle::Compact
        }
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Formats an amount for display.
///
/// `full_numbers = false` gives the compact style, `true` the full style.
///
/// ## Example
/// ```rust
/// use rentobuy_core::format_currency;
///
/// assert_eq!(format_currency(1500.0, false), "1.5K");
/// assert_eq!(format_currency(2_500_000.0, false), "2.5M");
/// assert_eq!(format_currency(-1_234_567.89, true), "-$1,234,567.9");
/// ```
pub fn format_currency(amount: f64, full_numbers: bool) -> String {
    format_currency_with(amount, CurrencyStyle::from_full_numbers(full_numbers))
}

/// Formats an amount in the given [`CurrencyStyle`].
///
/// Non-finite amounts render as `NaN`, `Infinity` or `-Infinity` in either
/// style, without symbol or suffix.
pub fn format_currency_with(amount: f64, style: CurrencyStyle) -> String {
    if !amount.is_finite() {
        return to_fixed(amount, 1);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    let magnitude = amount.abs();

    match style {
        CurrencyStyle::Full => {
            let fixed = to_fixed(magnitude, 1);
            let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
            format!("{sign}${}.{dec_part}", group_thousands(int_part))
        }
        CurrencyStyle::Compact => {
            if magnitude >= MILLION {
                format!("{sign}{}M", to_fixed(magnitude / MILLION, 1))
            } else if magnitude >= THOUSAND {
                format!("{sign}{}K", to_fixed(magnitude / THOUSAND, 1))
            } else {
                format!("{sign}{}", to_fixed(magnitude, 1))
            }
        }
    }
}

/// Inserts a comma every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Unit Tests
// =============================================================================
