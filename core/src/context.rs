//! Name context for UI communication.
//!
//! The `NameContext` struct is a plain data container the UI reads after each
//! event to redraw the name field and enable or disable its controls. It has
//! no behavior beyond serialization.

use serde::{Deserialize, Serialize};

use crate::session::SessionState;

/// Observable state of a name edit session.
///
/// # Fields
///
/// - `state`: lifecycle state (drives which controls are shown)
/// - `buffer`: text the field displays
/// - `committed`: last name the store acknowledged
/// - `length` / `max_length`: character counter for the field
/// - `can_submit` / `can_cancel`: whether save/cancel are enabled
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameContext {
    pub state: SessionState,

    /// Profile version tag being edited
    pub version: u32,

    pub buffer: String,

    pub committed: String,

    /// Length of `buffer` in characters
    pub length: usize,

    pub max_length: usize,

    pub can_submit: bool,

    pub can_cancel: bool,
}

impl NameContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the field should show an editor instead of the plain name.
    pub fn is_editing(&self) -> bool {
        self.state != SessionState::Viewing
    }

    /// Serialize to JSON for a web front end.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
