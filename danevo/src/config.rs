//! Dance Evolution configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `cabinetname_core::Config` (flattened via serde)
//! - Which repertoire the profile store re-checks saved names against
//!
//! # Example
//!
//! ```rust
//! use danevo::DanevoConfig;
//!
//! let config = DanevoConfig::from_toml_str("max_name_length = 8").unwrap();
//! assert_eq!(config.base().max_name_length, 8);
//! assert!(config.strict_store_repertoire);
//! ```
use serde::{Deserialize, Serialize};

/// Dance Evolution name settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DanevoConfig {
    /// Base configuration fields (length limits, store normalization)
    #[serde(flatten)]
    pub base: cabinetname_core::Config,

    /// Store accepts only its own narrower repertoire (no backtick, only
    /// ★ and ♪ as symbols). When false it accepts anything the cabinet draws.
    #[serde(default = "default_strict")]
    pub strict_store_repertoire: bool,
}

fn default_strict() -> bool {
    true
}

impl Default for DanevoConfig {
    fn default() -> Self {
        Self {
            base: cabinetname_core::Config::default(),
            strict_store_repertoire: default_strict(),
        }
    }
}

impl DanevoConfig {
    /// Convert into the base config
    pub fn into_base(self) -> cabinetname_core::Config {
        self.base
    }

    pub fn base(&self) -> &cabinetname_core::Config {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut cabinetname_core::Config {
        &mut self.base
    }

    /// Load from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml_str(&content)?)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
