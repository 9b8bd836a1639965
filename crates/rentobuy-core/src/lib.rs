//! # rentobuy-core: Value Text Codec for the Rent-vs-Buy Calculator
//!
//! This crate turns what a user types into the calculator ("1.5k", "6%",
//! "2y6m", "3,4,5") into numbers, and turns numbers back into display
//! strings ("1.5K", "-$1,234,567.9", "3.10%"). Every function is pure.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rentobuy Data Flow                                 │
//! │                                                                         │
//! │  User text ──► parse_amount / parse_duration / parse_appreciation_rates │
//! │                           │                                             │
//! │                           ▼                                             │
//! │                  Rent-vs-buy simulation (f64 / months)                  │
//! │                           │                                             │
//! │                           ▼                                             │
//! │  Display   ◄── format_currency / format_percent                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               ★ rentobuy-core (THIS CRATE) ★                    │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐ ┌─────────┐ │   │
//! │  │   │ currency │ │  amount  │ │ duration │ │ rates │ │ percent │ │   │
//! │  │   └────┬─────┘ └──────────┘ └──────────┘ └───────┘ └────┬────┘ │   │
//! │  │        └───────────────► fixed ◄────────────────────────┘      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`currency`] - Compact (`1.5K`) and full (`$1,500.0`) currency display
//! - [`percent`] - Two-decimal percent display
//! - [`amount`] - Free-text amount parsing with k/m/b suffixes
//! - [`duration`] - `<years>y<months>m` parsing into total months
//! - [`rates`] - Comma-separated appreciation rate lists
//! - [`fixed`] - Fixed-point rendering shared by both formatters
//! - [`error`] - Duration parse errors
//!
//! ## Two Error Strategies
//!
//! 1. **Silent degradation**: `parse_amount` and `parse_appreciation_rates`
//!    never fail. Unparseable text becomes `0`.
//! 2. **Explicit failure**: `parse_duration` returns a typed
//!    [`DurationError`] so the caller can tell the user what is wrong.
//!
//! Free-text numeric fields degrade gracefully; structured duration fields
//! validate strictly. Do not unify them.
//!
//! ## Example Usage
//!
//! ```rust
//! use rentobuy_core::{format_currency, format_percent, parse_amount, parse_duration};
//!
//! let price = parse_amount("450k");
//! assert_eq!(price, 450_000.0);
//! assert_eq!(format_currency(price, false), "450.0K");
//! assert_eq!(format_currency(price, true), "$450,000.0");
//!
//! assert_eq!(parse_duration("2y6m").unwrap(), 30);
//! assert_eq!(format_percent(3.1), "3.10%");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod currency;
pub mod duration;
pub mod error;
pub mod fixed;
pub mod percent;
pub mod rates;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::parse_amount;
pub use currency::{format_currency, format_currency_with, CurrencyStyle};
pub use duration::parse_duration;
pub use error::{DurationError, DurationResult};
pub use fixed::to_fixed;
pub use percent::format_percent;
pub use rates::parse_appreciation_rates;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Multiplier for the `k` input suffix and threshold for the `K` display suffix.
pub const THOUSAND: f64 = 1_000.0;

/// Multiplier for the `m` input suffix and threshold for the `M` display suffix.
pub const MILLION: f64 = 1_000_000.0;

/// Multiplier for the `b` input suffix. There is no `B` display suffix;
/// billions render in millions (`1500.0M`).
pub const BILLION: f64 = 1_000_000_000.0;

pub const MONTHS_PER_YEAR: i64 = 12;
