//! # rentobuy-store: Saved Profiles for the Rent-vs-Buy Calculator
//!
//! Saves, loads, lists and deletes named sets of calculator inputs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Rentobuy Data Flow                               │
//! │                                                                         │
//! │  Calculator form (raw text inputs)                                     │
//! │       │  save / load by name                                           │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  rentobuy-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │  StoreConfig  │───►│ ProfileStore  │───►│ SavedProfile │  │   │
//! │  │   │ (config.rs)   │    │  (store.rs)   │    │ (profile.rs) │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  .rentobuy_profiles/<name>.json                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Where profiles live (defaults, TOML, environment)
//! - [`store`] - The file-backed [`ProfileStore`]
//! - [`profile`] - The [`SavedProfile`] record
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rentobuy_store::{ProfileStore, StoreConfig};
//!
//! let config = StoreConfig::load_or_default(None);
//! let store = ProfileStore::from_config(&config);
//!
//! for name in store.list().unwrap() {
//!     println!("{name}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod profile;
pub mod store;

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use profile::SavedProfile;
pub use store::{validate_name, ProfileStore};
