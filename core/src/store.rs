//! Boundary with the profile store that owns committed names.
//!
//! The store is an external collaborator: it receives a submitted name and
//! either echoes back the canonical stored value or fails. `MemoryProfileStore`
//! is an in-process implementation that re-validates submissions the way a
//! server would.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::validator::{NameValidator, Rejection};
use crate::{utils, Config};

/// A name handed to the store on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSubmission {
    /// Opaque profile version tag the name belongs to
    pub version: u32,
    pub name: String,
}

/// The store's acknowledgement: the canonical stored name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedName {
    pub version: u32,
    pub name: String,
}

/// Reasons a store may refuse or fail a save.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("no profile for version {version}")]
    UnknownProfile { version: u32 },

    #[error("name is shorter than {min} characters")]
    TooShort { min: usize },

    #[error("invalid profile name: {0}")]
    Invalid(Rejection),

    #[error("store echoed profile version {got}, expected {expected}")]
    VersionMismatch { expected: u32, got: u32 },

    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}

/// External profile store receiving committed names.
pub trait ProfileStore {
    /// Persist `submission` and return the canonical stored value.
    fn save_name(&mut self, submission: &NameSubmission) -> Result<SavedName, SaveError>;
}

/// In-memory profile store keyed by version.
#[derive(Debug, Clone)]
pub struct MemoryProfileStore {
    profiles: HashMap<u32, String>,
    validator: NameValidator,
    min_length: usize,
    normalize: bool,
}

impl MemoryProfileStore {
    /// Create an empty store validating with `validator`.
    pub fn new(validator: NameValidator, config: &Config) -> Self {
        Self {
            profiles: HashMap::new(),
            validator,
            min_length: config.min_name_length,
            normalize: config.normalize_saved_names,
        }
    }

    /// Register a profile with its current name. Stored names are not
    /// validated; they are whatever the store already holds.
    pub fn insert_profile(&mut self, version: u32, name: impl Into<String>) {
        self.profiles.insert(version, name.into());
    }

    /// Current name of a profile.
    pub fn name(&self, version: u32) -> Option<&str> {
        self.profiles.get(&version).map(String::as_str)
    }

    /// Versions with a profile, ascending.
    pub fn versions(&self) -> Vec<u32> {
        let mut versions: Vec<u32> = self.profiles.keys().copied().collect();
        versions.sort_unstable();
        versions
    }

    fn canonicalize(&self, name: &str) -> String {
        if self.normalize {
            utils::normalize(name)
        } else {
            name.to_string()
        }
    }
}

impl ProfileStore for MemoryProfileStore {
    fn save_name(&mut self, submission: &NameSubmission) -> Result<SavedName, SaveError> {
        let version = submission.version;
        if !self.profiles.contains_key(&version) {
            warn!(version, "save for unknown profile");
            return Err(SaveError::UnknownProfile { version });
        }

        let name = self.canonicalize(&submission.name);
        if name.chars().count() < self.min_length {
            return Err(SaveError::TooShort {
                min: self.min_length,
            });
        }
        self.validator.check(&name).map_err(SaveError::Invalid)?;

        debug!(version, name = %name, "profile name stored");
        self.profiles.insert(version, name.clone());
        Ok(SavedName { version, name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allow_list::{AllowList, CodepointRange};

    fn store() -> MemoryProfileStore {
        let validator = NameValidator::new(
            AllowList::from_ranges(&[CodepointRange::new('\u{FF21}', '\u{FF3A}')]),
            4,
        );
        let mut store = MemoryProfileStore::new(validator, &Config::default());
        store.insert_profile(1, "ＯＬＤ");
        store
    }

    fn submit(version: u32, name: &str) -> NameSubmission {
        NameSubmission {
            version,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_save_updates_profile() {
        let mut store = store();
        let saved = store.save_name(&submit(1, "ＮＥＷ")).unwrap();
        assert_eq!(saved.name, "ＮＥＷ");
        assert_eq!(store.name(1), Some("ＮＥＷ"));
    }

    #[test]
    fn test_unknown_version() {
        let mut store = store();
        assert_eq!(
            store.save_name(&submit(7, "ＮＥＷ")),
            Err(SaveError::UnknownProfile { version: 7 })
        );
    }

    #[test]
    fn test_rejects_empty_after_trim() {
        let mut store = store();
        assert_eq!(
            store.save_name(&submit(1, "  ")),
            Err(SaveError::TooShort { min: 1 })
        );
        assert_eq!(store.name(1), Some("ＯＬＤ"));
    }

    #[test]
    fn test_echo_is_trimmed() {
        let mut store = store();
        let saved = store.save_name(&submit(1, " ＡＢ ")).unwrap();
        assert_eq!(saved.name, "ＡＢ");
    }

    #[test]
    fn test_rejects_outside_repertoire() {
        let mut store = store();
        let err = store.save_name(&submit(1, "ＡＢc")).unwrap_err();
        assert_eq!(
            err,
            SaveError::Invalid(Rejection::Disallowed { index: 2, ch: 'c' })
        );
    }

    #[test]
    fn test_versions_sorted() {
        let mut store = store();
        store.insert_profile(0, "");
        assert_eq!(store.versions(), vec![0, 1]);
    }
}
