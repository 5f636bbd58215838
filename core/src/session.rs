//! Name edit session state machine.
//!
//! `NameEditSession` holds the committed name and a working buffer. Every
//! change event carries the whole raw field value; the session maps it,
//! validates the result and either adopts it or keeps the prior buffer.
//! Rejected edits are silent: the buffer simply does not change.
//!
//! ```text
//! Viewing --begin_edit--> Editing --submit--> Saving --acknowledge--> Viewing
//!                         |  ^  |                |
//!                 cancel  |  |  keystroke        | fail
//!                         v  |                   v
//!                      Viewing  +-------------- Editing
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::codepoint::CodepointMapper;
use crate::context::NameContext;
use crate::store::{NameSubmission, ProfileStore, SaveError, SavedName};
use crate::validator::{NameValidator, Rejection};

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SessionState {
    /// Not editing; buffer mirrors the committed name
    #[default]
    Viewing,
    /// Buffer may differ from the committed name
    Editing,
    /// Submission in flight, waiting for the store
    Saving,
}

/// Result of feeding one change event to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Candidate was valid and is now the buffer
    Accepted,
    /// Candidate failed validation; buffer unchanged
    Rejected,
    /// Session was not in `Editing`; nothing happened
    Ignored,
}

/// Map the full raw value and validate the result.
fn transcode(
    mapper: &CodepointMapper,
    validator: &NameValidator,
    raw: &str,
) -> Result<String, Rejection> {
    let candidate = mapper.map_str(raw);
    validator.check(&candidate)?;
    Ok(candidate)
}

/// Pure edit reducer: map the full raw value and keep it only if valid.
pub fn reduce(
    mapper: &CodepointMapper,
    validator: &NameValidator,
    prior: &str,
    raw: &str,
) -> String {
    transcode(mapper, validator, raw).unwrap_or_else(|_| prior.to_string())
}

/// Stateful name editor for one profile.
#[derive(Debug, Clone)]
pub struct NameEditSession {
    mapper: CodepointMapper,
    validator: NameValidator,
    version: u32,
    committed: String,
    buffer: String,
    state: SessionState,
}

impl NameEditSession {
    /// Create a session in `Viewing` for the profile `version` whose stored
    /// name is `committed`.
    pub fn new(
        mapper: CodepointMapper,
        validator: NameValidator,
        version: u32,
        committed: impl Into<String>,
    ) -> Self {
        let committed = committed.into();
        Self {
            mapper,
            validator,
            version,
            buffer: committed.clone(),
            committed,
            state: SessionState::Viewing,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Current working buffer (what the field displays).
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Last name acknowledged by the store.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn mapper(&self) -> &CodepointMapper {
        &self.mapper
    }

    pub fn validator(&self) -> &NameValidator {
        &self.validator
    }

    /// Whether the buffer differs from the committed name.
    pub fn is_dirty(&self) -> bool {
        self.buffer != self.committed
    }

    /// `Viewing -> Editing`. Returns false if already editing or saving.
    pub fn begin_edit(&mut self) -> bool {
        if self.state != SessionState::Viewing {
            return false;
        }
        self.buffer = self.committed.clone();
        self.state = SessionState::Editing;
        debug!(version = self.version, "name edit started");
        true
    }

    /// Feed the full raw field value after a change event.
    pub fn keystroke(&mut self, raw: &str) -> EditOutcome {
        if self.state != SessionState::Editing {
            trace!(state = ?self.state, "keystroke ignored");
            return EditOutcome::Ignored;
        }

        match transcode(&self.mapper, &self.validator, raw) {
            Ok(candidate) => {
                trace!(buffer = %candidate, "edit accepted");
                self.buffer = candidate;
                EditOutcome::Accepted
            }
            Err(reason) => {
                debug!(%reason, "edit rejected");
                EditOutcome::Rejected
            }
        }
    }

    /// `Editing -> Viewing`, restoring the committed name. No-op elsewhere.
    pub fn cancel(&mut self) -> bool {
        if self.state != SessionState::Editing {
            return false;
        }
        self.buffer = self.committed.clone();
        self.state = SessionState::Viewing;
        debug!(version = self.version, "name edit cancelled");
        true
    }

    /// `Editing -> Saving`. Returns the submission to hand to the store.
    pub fn submit(&mut self) -> Option<NameSubmission> {
        if self.state != SessionState::Editing {
            return None;
        }
        self.state = SessionState::Saving;
        debug!(version = self.version, name = %self.buffer, "name submitted");
        Some(NameSubmission {
            version: self.version,
            name: self.buffer.clone(),
        })
    }

    /// `Saving -> Viewing`, adopting the store's canonical echo.
    ///
    /// Acks for another profile version, or outside `Saving`, are ignored.
    pub fn acknowledge(&mut self, saved: SavedName) -> bool {
        if self.state != SessionState::Saving {
            return false;
        }
        if saved.version != self.version {
            warn!(
                expected = self.version,
                got = saved.version,
                "ack for another profile version ignored"
            );
            return false;
        }
        debug!(version = self.version, name = %saved.name, "name committed");
        self.buffer = saved.name.clone();
        self.committed = saved.name;
        self.state = SessionState::Viewing;
        true
    }

    /// `Saving -> Editing`, keeping the in-progress buffer.
    pub fn fail(&mut self) -> bool {
        if self.state != SessionState::Saving {
            return false;
        }
        self.state = SessionState::Editing;
        true
    }

    /// Submit to a synchronous store and apply its answer.
    ///
    /// Returns `None` when the session is not editing. An echo tagged with
    /// another profile version is reported as `VersionMismatch` and the
    /// session goes back to `Editing`.
    pub fn commit_with<S: ProfileStore + ?Sized>(
        &mut self,
        store: &mut S,
    ) -> Option<Result<SavedName, SaveError>> {
        let submission = self.submit()?;
        let result = store.save_name(&submission);
        match &result {
            Ok(saved) => {
                if !self.acknowledge(saved.clone()) {
                    self.fail();
                    return Some(Err(SaveError::VersionMismatch {
                        expected: self.version,
                        got: saved.version,
                    }));
                }
            }
            Err(err) => {
                warn!(version = self.version, %err, "name save failed");
                self.fail();
            }
        }
        Some(result)
    }

    /// Snapshot of the observable state for the UI.
    pub fn context(&self) -> NameContext {
        let mut context = NameContext::new();
        self.sync_to_context(&mut context);
        context
    }

    /// Write the observable state into an existing context.
    pub fn sync_to_context(&self, context: &mut NameContext) {
        context.state = self.state;
        context.version = self.version;
        context.buffer.clone_from(&self.buffer);
        context.committed.clone_from(&self.committed);
        context.length = self.buffer.chars().count();
        context.max_length = self.validator.max_length();
        context.can_submit = self.state == SessionState::Editing;
        context.can_cancel = self.state == SessionState::Editing;
    }
}
