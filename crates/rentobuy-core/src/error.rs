//! # Error Types
//!
//! Error types for rentobuy-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rentobuy-core errors (this file)                                      │
//! │  └── DurationError   - "2y6m" style input that cannot be used          │
//! │                                                                         │
//! │  rentobuy-store errors (separate crate)                                │
//! │  └── StoreError      - Profile file failures                           │
//! │                                                                         │
//! │  parse_amount / parse_appreciation_rates have NO error type:           │
//! │  bad input becomes 0.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending text in error messages
//! 3. One variant per cause so callers can branch on it

use thiserror::Error;

// =============================================================================
// Duration Error
// =============================================================================

/// Why a duration string was rejected.
///
/// ## User Workflow
/// ```text
/// "Loan term" field: "xy"
///      │
///      ▼
/// parse_duration("xy")
///      │
///      ▼
/// InvalidYearFormat { segment: "x" }
///      │
///      ▼
/// UI shows: "Invalid year format: 'x'"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    /// The text before the first `y` does not start with an integer.
    #[error("Invalid year format: '{segment}'")]
    InvalidYearFormat { segment: String },

    /// The text before the first `m` (after any `y`) does not start with an integer.
    #[error("Invalid month format: '{segment}'")]
    InvalidMonthFormat { segment: String },

    /// Years and months add up to zero or less.
    ///
    /// ## When This Occurs
    /// - `"0y0m"`
    /// - `""` or any text with neither `y` nor `m`
    /// - `"-1y6m"` (negative segments are accepted individually)
    #[error("Duration must be greater than 0, got {total_months} months")]
    NonPositiveDuration { total_months: i64 },
}

impl DurationError {
    /// Stable machine-readable code for UI layers.
    pub fn code(&self) -> &'static str {
        match self {
            DurationError::InvalidYearFormat { .. } => "INVALID_YEAR_FORMAT",
            DurationError::InvalidMonthFormat { .. } => "INVALID_MONTH_FORMAT",
            DurationError::NonPositiveDuration { .. } => "NON_POSITIVE_DURATION",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DurationError.
pub type DurationResult<T> = Result<T, DurationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DurationError::InvalidYearFormat {
            segment: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid year format: 'x'");

        let err = DurationError::InvalidMonthFormat {
            segment: "six".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid month format: 'six'");

        let err = DurationError::NonPositiveDuration { total_months: 0 };
        assert_eq!(err.to_string(), "Duration must be greater than 0, got 0 months");
    }

    #[test]
    fn test_codes_are_distinct() {
        let codes = [
            DurationError::InvalidYearFormat {
                segment: String::new(),
            }
            .code(),
            DurationError::InvalidMonthFormat {
                segment: String::new(),
            }
            .code(),
            DurationError::NonPositiveDuration { total_months: 0 }.code(),
        ];
        assert_ne!(codes[0], codes[1]);
        assert_ne!(codes[1], codes[2]);
        assert_ne!(codes[0], codes[2]);
    }
}
