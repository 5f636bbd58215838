//! danevo crate root
//!
//! Dance Evolution name repertoire on top of `cabinetname-core`: the keyboard
//! mapping table, the cabinet allow-list, and factories that assemble them
//! into validators, edit sessions and key-driven name fields.
//!
//! ```rust
//! use danevo::{new_session, DanevoConfig, EditOutcome};
//!
//! let mut session = new_session(&DanevoConfig::default(), 1, "");
//! session.begin_edit();
//! assert_eq!(session.keystroke("Mike123"), EditOutcome::Accepted);
//! assert_eq!(session.buffer(), "Ｍｉｋｅ１２３");
//! ```

pub mod config;
pub mod tables;

pub use cabinetname_core::{
    reduce, AllowList, CodepointMapper, CodepointRange, EditOutcome, InputBuffer, KeyEvent,
    KeyResult, MappingRule, MemoryProfileStore, NameContext, NameEditSession, NameEntry,
    NameSubmission, NameValidator, ProfileStore, Rejection, SaveError, SavedName, SessionState,
};

pub use config::DanevoConfig;
pub use tables::{CABINET_REPERTOIRE, NAME_MAPPING, STORE_REPERTOIRE};

/// Keyboard to cabinet font mapper.
pub fn name_mapper() -> CodepointMapper {
    CodepointMapper::new(NAME_MAPPING)
}

/// Everything the cabinet can draw.
pub fn cabinet_allow_list() -> AllowList {
    AllowList::from_ranges(CABINET_REPERTOIRE)
}

/// Validator applied on every edit.
pub fn name_validator(config: &DanevoConfig) -> NameValidator {
    NameValidator::new(cabinet_allow_list(), config.base.max_name_length)
}

/// Edit session for profile `version` currently named `committed`.
pub fn new_session(
    config: &DanevoConfig,
    version: u32,
    committed: impl Into<String>,
) -> NameEditSession {
    NameEditSession::new(name_mapper(), name_validator(config), version, committed)
}

/// Key-driven name field for profile `version`.
pub fn new_entry(config: &DanevoConfig, version: u32, committed: impl Into<String>) -> NameEntry {
    NameEntry::new(new_session(config, version, committed))
}

/// In-memory profile store that re-checks names the way the server does.
pub fn profile_store(config: &DanevoConfig) -> MemoryProfileStore {
    let allow_list = if config.strict_store_repertoire {
        AllowList::from_ranges(STORE_REPERTOIRE)
    } else {
        cabinet_allow_list()
    };
    let validator = NameValidator::new(allow_list, config.base.max_name_length);
    MemoryProfileStore::new(validator, &config.base)
}
