//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / toml::de::Error                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds profile name and categorization        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CLI / UI prints a user-friendly message                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Profile store and configuration errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Profile name cannot be used as a file name.
    ///
    /// ## When This Occurs
    /// - Empty or whitespace-only name
    /// - Name contains `/`, `\`, `..` or control characters
    #[error("Invalid profile name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// No profile with that name exists.
    #[error("Profile not found: {0}")]
    NotFound(String),

    /// Filesystem failure (permissions, disk full, ...).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile file is not valid JSON or has the wrong shape.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file is not valid TOML.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Config loaded but its values are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    /// Creates an InvalidName error.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        StoreError::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
