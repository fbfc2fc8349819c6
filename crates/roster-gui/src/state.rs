//! Application state.
//!
//! `AppState` is the root of all state: the fetch lifecycle, the roster
//! state machine, the single in-progress row edit, and the role dialog.

use roster_directory::Roster;
use roster_model::{MemberId, MemberRecord};

use crate::error::GuiError;

/// Lifecycle of the one-shot roster fetch.
#[derive(Debug, Clone, Default)]
pub enum LoadPhase {
    /// Fetch in flight; the loading screen is showing.
    #[default]
    Loading,
    /// Roster loaded; the table is showing.
    Ready,
    /// Fetch failed; the error screen (with retry) is showing.
    Failed(GuiError),
}

/// In-progress inline edit of a single row.
///
/// At most one row is editable at a time; starting an edit on another row
/// discards this draft without saving.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl EditDraft {
    /// Seed a draft from the record's current fields.
    pub fn from_record(record: &MemberRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role.clone(),
        }
    }
}

/// State of the role-change modal.
#[derive(Debug, Clone, Default)]
pub struct RoleDialog {
    /// The role as typed so far.
    pub role: String,
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct AppState {
    pub phase: LoadPhase,
    pub roster: Roster,
    pub edit: Option<EditDraft>,
    pub role_dialog: Option<RoleDialog>,
}

impl AppState {
    /// Whether the row with `id` is currently in edit mode.
    pub fn is_editing(&self, id: &MemberId) -> bool {
        self.edit.as_ref().is_some_and(|draft| &draft.id == id)
    }

    /// Drop any in-progress edit draft. Called whenever the table is about
    /// to be rebuilt around it (search, pagination, deletes).
    pub fn discard_edit(&mut self) {
        self.edit = None;
    }
}
