//! # Saved Profile
//!
//! A named set of calculator inputs, stored exactly as the user typed them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  starter-home.json                                                      │
//! │  {                                                                      │
//! │    "name": "starter-home",                                              │
//! │    "inputs": {                                                          │
//! │      "home_price": "450k",          ← parse_amount at read time         │
//! │      "loan_term": "30y",            ← parse_duration at read time       │
//! │      "appreciation": "3,3,4"        ← parse_appreciation_rates          │
//! │    },                                                                   │
//! │    "saved_at": "2026-10-17T09:30:00Z"                                   │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Raw text is kept rather than parsed numbers so a reloaded profile shows
//! the user's own notation ("450k", not "450000").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

/// On-disk body of a profile file.
///
/// Profiles written by the terminal version of the calculator are a bare
/// `{"field": "text"}` map with no name or timestamp. Those still load; the
/// store fills in the name from the file stem and the time from the file's
/// modification time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ProfileFile {
    Current(SavedProfile),
    Legacy(BTreeMap<String, String>),
}

/// A saved set of calculator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedProfile {
    /// Profile name, also the file stem on disk.
    pub name: String,

    /// Input field name → raw text. Sorted for stable files and listings.
    pub inputs: BTreeMap<String, String>,

    /// When the profile was last saved.
    #[ts(as = "String")]
    pub saved_at: DateTime<Utc>,
}

impl SavedProfile {
    /// Creates a profile stamped with the current time.
    pub fn new(name: impl Into<String>, inputs: BTreeMap<String, String>) -> Self {
        SavedProfile {
            name: name.into(),
            inputs,
            saved_at: Utc::now(),
        }
    }

    /// Returns the raw text of one input, if present.
    pub fn input(&self, field: &str) -> Option<&str> {
        self.inputs.get(field).map(String::as_str)
    }
}
