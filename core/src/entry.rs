//! Key-driven front end for a name edit session.
//!
//! `NameEntry` turns discrete key events into full-field change events. For
//! each editing key it applies the key to a copy of the displayed field,
//! hands the whole resulting text to the session, and then makes the field
//! mirror the session buffer again. The field is therefore "controlled": a
//! rejected key leaves both text and caret exactly as they were.

use tracing::trace;

use crate::context::NameContext;
use crate::input_buffer::InputBuffer;
use crate::session::{EditOutcome, NameEditSession, SessionState};
use crate::store::{NameSubmission, SaveError, SavedName};

/// Key event types the name field can process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character typed on the keyboard
    Char(char),
    /// Pasted or IME-committed text
    Paste(String),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    /// Submit the buffer
    Enter,
    /// Cancel the edit
    Escape,
}

/// Result of processing a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResult {
    /// Key was handled by the field
    Handled,
    /// Key was an edit that failed validation; nothing changed
    Rejected,
    /// Key was not handled (not editing, or a save is in flight)
    NotHandled,
}

/// Name field bound to a session.
#[derive(Debug, Clone)]
pub struct NameEntry {
    session: NameEditSession,
    field: InputBuffer,
    pending: Option<NameSubmission>,
}

impl NameEntry {
    pub fn new(session: NameEditSession) -> Self {
        let field = InputBuffer::from_text(session.buffer());
        Self {
            session,
            field,
            pending: None,
        }
    }

    pub fn session(&self) -> &NameEditSession {
        &self.session
    }

    /// The field as displayed.
    pub fn field(&self) -> &InputBuffer {
        &self.field
    }

    pub fn context(&self) -> NameContext {
        self.session.context()
    }

    /// Start editing; the caret goes to the end of the name.
    pub fn begin_edit(&mut self) -> bool {
        let started = self.session.begin_edit();
        if started {
            self.resync();
        }
        started
    }

    /// Take the submission produced by `Enter`, if any.
    pub fn take_submission(&mut self) -> Option<NameSubmission> {
        self.pending.take()
    }

    /// Apply the store's acknowledgement.
    pub fn acknowledge(&mut self, saved: SavedName) -> bool {
        let applied = self.session.acknowledge(saved);
        if applied {
            self.resync();
        }
        applied
    }

    /// Apply a store failure; the field keeps the in-progress name.
    pub fn fail(&mut self, err: &SaveError) -> bool {
        trace!(%err, "save failure reported to entry");
        self.session.fail()
    }

    /// Process a key event.
    pub fn process_key(&mut self, key: KeyEvent) -> KeyResult {
        if self.session.state() != SessionState::Editing {
            return KeyResult::NotHandled;
        }

        match key {
            KeyEvent::Char(ch) => {
                let mut next = self.field.clone();
                next.insert_char(ch);
                self.apply(next)
            }
            KeyEvent::Paste(text) => {
                let mut next = self.field.clone();
                next.insert_str(&text);
                self.apply(next)
            }
            KeyEvent::Backspace => {
                let mut next = self.field.clone();
                if !next.delete_before() {
                    return KeyResult::Handled;
                }
                self.apply(next)
            }
            KeyEvent::Delete => {
                let mut next = self.field.clone();
                if !next.delete_after() {
                    return KeyResult::Handled;
                }
                self.apply(next)
            }
            KeyEvent::Left => {
                self.field.move_left();
                KeyResult::Handled
            }
            KeyEvent::Right => {
                self.field.move_right();
                KeyResult::Handled
            }
            KeyEvent::Home => {
                self.field.move_to_start();
                KeyResult::Handled
            }
            KeyEvent::End => {
                self.field.move_to_end();
                KeyResult::Handled
            }
            KeyEvent::Enter => {
                self.pending = self.session.submit();
                KeyResult::Handled
            }
            KeyEvent::Escape => {
                self.session.cancel();
                self.resync();
                KeyResult::Handled
            }
        }
    }

    fn apply(&mut self, mut next: InputBuffer) -> KeyResult {
        match self.session.keystroke(next.text()) {
            EditOutcome::Accepted => {
                // Mapping is one char to one char, so the caret stays put
                next.set_text(self.session.buffer());
                self.field = next;
                KeyResult::Handled
            }
            EditOutcome::Rejected => KeyResult::Rejected,
            EditOutcome::Ignored => KeyResult::NotHandled,
        }
    }

    fn resync(&mut self) {
        self.field = InputBuffer::from_text(self.session.buffer());
    }
}
