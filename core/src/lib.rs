//! cabinetname-core
//!
//! Table-driven name transcoding and validation shared by cabinet-specific
//! crates (e.g. `danevo`). A cabinet crate supplies the mapping table and the
//! allow-list; this crate provides the machinery around them.
//!
//! Public API:
//! - `CodepointMapper` / `MappingRule` - half-width to native character mapping
//! - `AllowList` / `CodepointRange` - closed renderable repertoire
//! - `NameValidator` - length and repertoire check
//! - `NameEditSession` - edit state machine that only holds valid content
//! - `NameEntry` - key-event driven field on top of a session
//! - `ProfileStore` - the external store that receives committed names
//! - `Config` - limits and store behavior
use serde::{Deserialize, Serialize};

pub mod allow_list;
pub use allow_list::{AllowList, CodepointRange};

pub mod codepoint;
pub use codepoint::{CodepointMapper, MappingRule};

pub mod validator;
pub use validator::{NameValidator, Rejection};

pub mod input_buffer;
pub use input_buffer::InputBuffer;

pub mod context;
pub use context::NameContext;

pub mod store;
pub use store::{MemoryProfileStore, NameSubmission, ProfileStore, SaveError, SavedName};

pub mod session;
pub use session::{reduce, EditOutcome, NameEditSession, SessionState};

pub mod entry;
pub use entry::{KeyEvent, KeyResult, NameEntry};

/// Generic configuration for name handling.
///
/// Cabinet crates flatten this into their own config (see `DanevoConfig`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Maximum name length in characters, enforced on every edit
    pub max_name_length: usize,

    /// Minimum name length the profile store accepts on save.
    /// Edits may pass through shorter (including empty) names.
    pub min_name_length: usize,

    /// Store names NFC-normalized and trimmed
    pub normalize_saved_names: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_name_length: 10,
            min_name_length: 1,
            normalize_saved_names: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

/// Utility helpers.
pub mod utils {
    /// Normalize input strings (NFC) and trim whitespace.
    pub fn normalize(s: &str) -> String {
        use unicode_normalization::UnicodeNormalization;
        s.nfc().collect::<String>().trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.max_name_length, 10);
        assert_eq!(cfg.min_name_length, 1);
        assert!(cfg.normalize_saved_names);
    }

    #[test]
    fn test_toml_round_trip_with_missing_fields() {
        let cfg = Config::from_toml_str("max_name_length = 8\n").unwrap();
        assert_eq!(cfg.max_name_length, 8);
        assert_eq!(cfg.min_name_length, 1);

        let text = cfg.to_toml_string().unwrap();
        assert_eq!(Config::from_toml_str(&text).unwrap(), cfg);
    }

    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "cabinetname_config_{}.toml",
            std::process::id()
        ));
        let cfg = Config {
            normalize_saved_names: false,
            ..Config::default()
        };
        cfg.save_toml(&path).unwrap();
        let loaded = Config::load_toml(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn test_normalize_composes_and_trims() {
        // か + combining dakuten composes to が
        assert_eq!(utils::normalize(" \u{304B}\u{3099} "), "\u{304C}");
    }
}
