//! # Profile Store
//!
//! File-backed store of [`SavedProfile`]s, one pretty-printed JSON file per
//! profile.
//!
//! ## Layout
//! ```text
//! .rentobuy_profiles/
//! ├── downtown-condo.json
//! ├── starter-home.json
//! └── notes.txt            ← ignored (not .json)
//! ```
//!
//! ## Semantics
//! - `save` is an upsert: saving an existing name overwrites it
//! - The directory is created on first `list` or `save`
//! - No locking: concurrent writers to the same name, last one wins
//! - Bare `{"field": "text"}` files from the terminal calculator load too

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::profile::{ProfileFile, SavedProfile};

const PROFILE_EXTENSION: &str = "json";

/// Name-keyed store of saved profiles.
///
/// ## Example
/// ```rust,no_run
/// use std::collections::BTreeMap;
/// use rentobuy_store::ProfileStore;
///
/// let store = ProfileStore::new(".rentobuy_profiles");
///
/// let mut inputs = BTreeMap::new();
/// inputs.insert("home_price".to_string(), "450k".to_string());
/// store.save("starter-home", inputs).unwrap();
///
/// assert_eq!(store.list().unwrap(), vec!["starter-home".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    /// Creates a store rooted at `dir`. Nothing is touched on disk yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ProfileStore { dir: dir.into() }
    }

    /// Creates a store from configuration.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.profiles_dir.clone())
    }

    /// Returns the profiles directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the names of all saved profiles, sorted.
    pub fn list(&self) -> StoreResult<Vec<String>> {
        self.ensure_dir()?;

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXTENSION) {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }

        names.sort();
        debug!(dir = ?self.dir, count = names.len(), "Listed profiles");
        Ok(names)
    }

    /// Checks whether a profile exists. Invalid names never exist.
    pub fn exists(&self, name: &str) -> bool {
        self.profile_path(name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    /// Loads a profile by name.
    ///
    /// ## Errors
    /// - [`StoreError::InvalidName`] if the name is unusable
    /// - [`StoreError::NotFound`] if no such profile is saved
    /// - [`StoreError::Serialization`] if the file is corrupt
    pub fn load(&self, name: &str) -> StoreResult<SavedProfile> {
        let name = validate_name(name)?;
        let path = self.profile_path(name)?;

        let contents = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(name.to_string()),
            _ => StoreError::Io(e),
        })?;

        let mut profile = match serde_json::from_str(&contents)? {
            ProfileFile::Current(profile) => profile,
            ProfileFile::Legacy(inputs) => {
                debug!(name, "Loading legacy profile without metadata");
                SavedProfile {
                    name: String::new(),
                    inputs,
                    saved_at: modified_at(&path),
                }
            }
        };
        // The file name is the key, whatever the file body says
        profile.name = name.to_string();

        debug!(name, inputs = profile.inputs.len(), "Loaded profile");
        Ok(profile)
    }

    /// Saves (creates or overwrites) a profile and returns what was written.
    pub fn save(
        &self,
        name: &str,
        inputs: BTreeMap<String, String>,
    ) -> StoreResult<SavedProfile> {
        let name = validate_name(name)?;
        let path = self.profile_path(name)?;
        self.ensure_dir()?;

        let overwrite = path.is_file();
        let profile = SavedProfile::new(name, inputs);
        let contents = serde_json::to_string_pretty(&profile)?;
        std::fs::write(&path, contents)?;

        info!(name, overwrite, ?path, "Profile saved");
        Ok(profile)
    }

    /// Deletes a profile.
    pub fn delete(&self, name: &str) -> StoreResult<()> {
        let name = validate_name(name)?;
        let path = self.profile_path(name)?;

        std::fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(name.to_string()),
            _ => StoreError::Io(e),
        })?;

        info!(name, "Profile deleted");
        Ok(())
    }

    /// Loads every profile, sorted by name. Unreadable files are skipped.
    pub fn load_all(&self) -> StoreResult<Vec<SavedProfile>> {
        let mut profiles = Vec::new();

        for name in self.list()? {
            match self.load(&name) {
                Ok(profile) => profiles.push(profile),
                Err(e) => warn!(name = %name, error = %e, "Skipping unreadable profile"),
            }
        }

        Ok(profiles)
    }

    fn ensure_dir(&self) -> StoreResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    fn profile_path(&self, name: &str) -> StoreResult<PathBuf> {
        let name = validate_name(name)?;
        Ok(self.dir.join(format!("{name}.{PROFILE_EXTENSION}")))
    }
}

/// File modification time, or now if the platform cannot report it.
fn modified_at(path: &Path) -> DateTime<Utc> {
    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}

/// Validates a profile name and returns it trimmed.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must not contain `/` or `\`
/// - Must not start with `.` (hidden files, `..`)
/// - Must not contain control characters
pub fn validate_name(name: &str) -> StoreResult<&str> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(StoreError::invalid_name(name, "must not be empty"));
    }

    if trimmed.contains(['/', '\\']) {
        return Err(StoreError::invalid_name(
            name,
            "must not contain path separators",
        ));
    }

    if trimmed.starts_with('.') {
        return Err(StoreError::invalid_name(name, "must not start with '.'"));
    }

    if trimmed.chars().any(char::is_control) {
        return Err(StoreError::invalid_name(
            name,
            "must not contain control characters",
        ));
    }

    Ok(trimmed)
}

// =============================================================================
// Unit Tests
// =============================================================================
