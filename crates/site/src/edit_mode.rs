//! Edit-mode interaction state machine.
//!
//! A global [`EditMode`] flag gates all editing affordances. While it is on,
//! at most one content field is in the Editing state, tracked by
//! [`EditSession`]: Viewing (no active edit) → Editing (pending text mutates
//! freely) → Saved (pending committed via [`SetContentEvent`]) or Cancelled
//! (pending discarded). The store value never changes until a save commits,
//! so cancel needs nothing restored.
//!
//! Policy: turning the global flag off force-cancels any in-flight edit
//! ([`enforce_edit_gate`]). No field may be Editing while edit mode is off.

use bevy::prelude::*;

use crate::content::{ContentField, SetContentEvent};

/// Global edit-mode flag. When false, every field is read-only.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditMode(pub bool);

/// An in-flight edit of a single content field.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveEdit {
    pub field: ContentField,
    /// Store value at the time the edit began. Kept for inspection; the
    /// store itself is the source of truth on cancel.
    pub original: String,
    /// Scratch text mutated by the editor (and by arriving AI suggestions).
    pub pending: String,
}

/// Tracks the at-most-one active field edit.
#[derive(Resource, Default, Debug, Clone, PartialEq)]
pub struct EditSession {
    active: Option<ActiveEdit>,
}

impl EditSession {
    /// Enter the Editing state for `field`. Starting a new session while
    /// another field is mid-edit implicitly cancels the previous one.
    /// A no-op while [`EditMode`] is off, so no caller can open a session
    /// past the gate.
    pub fn begin(&mut self, mode: EditMode, field: ContentField, current: &str) {
        if !mode.0 {
            return;
        }
        self.active = Some(ActiveEdit {
            field,
            original: current.to_string(),
            pending: current.to_string(),
        });
    }

    pub fn active(&self) -> Option<&ActiveEdit> {
        self.active.as_ref()
    }

    pub fn active_mut(&mut self) -> Option<&mut ActiveEdit> {
        self.active.as_mut()
    }

    pub fn is_editing(&self, field: ContentField) -> bool {
        self.active.as_ref().is_some_and(|a| a.field == field)
    }

    /// Commit the pending text, returning the event to dispatch into the
    /// content store. Returns `None` when nothing was being edited.
    pub fn save(&mut self) -> Option<SetContentEvent> {
        self.active.take().map(|a| SetContentEvent {
            field: a.field,
            value: a.pending,
        })
    }

    /// Discard the pending text and return to Viewing.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}

/// Force-cancels the active edit whenever the global flag turns off, so the
/// "no field is Editing while edit mode is off" invariant holds even for
/// edits that were mid-flight during the toggle.
pub fn enforce_edit_gate(mode: Res<EditMode>, mut session: ResMut<EditSession>) {
    if mode.is_changed() && !mode.0 && session.active().is_some() {
        info!("edit mode off: cancelling in-flight edit");
        session.cancel();
    }
}
