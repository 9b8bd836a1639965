//! # Store Configuration
//!
//! Where saved profiles live.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RENTOBUY_PROFILES_DIR=/data/profiles                               │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/rentobuy/store.toml (Linux)                              │
//! │     ~/Library/Application Support/com.rentobuy.rentobuy/store.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     profiles_dir = ".rentobuy_profiles" (relative to working dir)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # store.toml
//! profiles_dir = "/home/me/rentobuy/profiles"
//! ```

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Default profiles directory, relative to the working directory.
pub const DEFAULT_PROFILES_DIR: &str = ".rentobuy_profiles";

/// Environment variable overriding the profiles directory.
pub const PROFILES_DIR_ENV: &str = "RENTOBUY_PROFILES_DIR";

fn default_profiles_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PROFILES_DIR)
}

/// Profile store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one `<name>.json` file per profile.
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            profiles_dir: default_profiles_dir(),
        }
    }
}

impl StoreConfig {
    /// Creates a config pointing at `profiles_dir`.
    pub fn new(profiles_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            profiles_dir: profiles_dir.into(),
        }
    }

    /// Resolves the profiles directory.
    ///
    /// The file (`config_path`, or `store.toml` in the platform config dir)
    /// replaces the default when present; `RENTOBUY_PROFILES_DIR` then wins
    /// over both.
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let from_file = match config_path.or_else(Self::default_config_path) {
            Some(path) => Self::read_file(&path)?,
            None => None,
        };

        let mut config = from_file.unwrap_or_default();
        config.apply_env_overrides();
        config.validate()?;

        debug!(profiles_dir = ?config.profiles_dir, "Store config resolved");
        Ok(config)
    }

    /// Like [`StoreConfig::load`], but a broken config file is logged and
    /// the defaults are used instead.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        match Self::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Unusable store config, falling back to defaults");
                Self::default()
            }
        }
    }

    /// Reads a TOML config file. A missing file is `Ok(None)`.
    fn read_file(path: &Path) -> StoreResult<Option<Self>> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?path, "No store config file");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let config: Self = toml::from_str(&contents)?;
        info!(?path, profiles_dir = ?config.profiles_dir, "Read store config file");
        Ok(Some(config))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.profiles_dir.as_os_str().is_empty() {
            return Err(StoreError::InvalidConfig(
                "profiles_dir must not be empty".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a variable lookup (the process environment in
    /// production, a map in tests).
    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(dir) = lookup(PROFILES_DIR_ENV) {
            if dir.trim().is_empty() {
                warn!("Ignoring empty {}", PROFILES_DIR_ENV);
            } else {
                debug!(profiles_dir = %dir, "Overriding profiles dir from environment");
                self.profiles_dir = PathBuf::from(dir);
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "rentobuy", "rentobuy")
            .map(|dirs| dirs.config_dir().join("store.toml"))
    }
}
