//! Message hierarchy for the Elm-style update loop.
//!
//! All user interactions and system events are represented here. The
//! `update` function in `app` processes these to modify application state;
//! views are pure functions of the state that results.

use iced::keyboard;
use roster_model::{MemberId, MemberRecord};

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    // =========================================================================
    // Background task results
    // =========================================================================
    /// The roster fetch (initial or retried) completed.
    RosterLoaded(Result<Vec<MemberRecord>, String>),

    /// User asked to retry a failed fetch.
    RetryLoad,

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Roster screen interactions (toolbar, table, pagination footer).
    Roster(RosterMessage),

    /// Role-change dialog interactions.
    Dialog(DialogMessage),

    // =========================================================================
    // Global events
    // =========================================================================
    /// Keyboard event (Escape closes the dialog or cancels an edit).
    KeyPressed(keyboard::Key),

    /// No operation - used for ignored events.
    Noop,
}

/// Messages from the roster screen.
#[derive(Debug, Clone)]
pub enum RosterMessage {
    // Toolbar
    /// Search input changed (fires on every keystroke).
    SearchChanged(String),
    /// "Delete selected" clicked.
    DeleteSelected,
    /// "Change role" clicked; opens the role dialog.
    ChangeRoleClicked,

    // Table
    /// A row checkbox was toggled (position within the current page).
    RowToggled(usize, bool),
    /// The page-scoped select-all checkbox was toggled.
    SelectAllToggled(bool),
    /// Per-row Edit button.
    EditRow(MemberId),
    /// Per-row Delete button.
    DeleteRow(MemberId),

    // Inline editor
    EditNameChanged(String),
    EditEmailChanged(String),
    EditRoleChanged(String),
    EditSaved,
    EditCancelled,

    // Pagination footer
    RowsPerPageChanged(usize),
    FirstPage,
    PreviousPage,
    NextPage,
    LastPage,
}

/// Messages from the role-change dialog.
#[derive(Debug, Clone)]
pub enum DialogMessage {
    /// The role input changed.
    RoleChanged(String),
    /// Apply the entered role to the selected rows. Blank input is a
    /// no-op close, matching a cancelled prompt.
    Apply,
    /// Close without changing anything.
    Cancel,
}
