//! Main application module.
//!
//! Elm pattern: State -> Message -> Update -> View. All state changes
//! happen in `update`; views are pure functions of the state. The only
//! background work is the roster fetch, run through `Task::perform`.

use iced::keyboard;
use iced::{Element, Subscription, Task, Theme};

use crate::error::GuiError;
use crate::message::{DialogMessage, Message, RosterMessage};
use crate::service;
use crate::state::{AppState, EditDraft, LoadPhase, RoleDialog};
use crate::theme::app_theme;
use crate::view::view_app;

/// Main application struct.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create the application and start the initial roster fetch.
    pub fn new() -> (Self, Task<Message>) {
        let app = Self {
            state: AppState::default(),
        };
        let fetch = service::load_roster(service::DEFAULT_ROSTER_URL.to_string());
        (app, fetch)
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RosterLoaded(result) => {
                match result {
                    Ok(records) => {
                        tracing::info!(count = records.len(), "roster loaded");
                        self.state.roster.load(records);
                        self.state.phase = LoadPhase::Ready;
                    }
                    Err(reason) => {
                        tracing::error!(%reason, "failed to load roster");
                        self.state.phase = LoadPhase::Failed(GuiError::RosterLoad { reason });
                    }
                }
                Task::none()
            }

            Message::RetryLoad => {
                self.state.phase = LoadPhase::Loading;
                service::load_roster(service::DEFAULT_ROSTER_URL.to_string())
            }

            Message::Roster(roster_message) => self.handle_roster_message(roster_message),

            Message::Dialog(dialog_message) => self.handle_dialog_message(dialog_message),

            Message::KeyPressed(key) => self.handle_key_press(key),

            Message::Noop => Task::none(),
        }
    }

    /// Handle roster screen messages.
    ///
    /// Messages that rebuild the table around an in-progress row edit
    /// (search, pagination, deletes) discard the draft first, matching the
    /// display rebuild they trigger.
    fn handle_roster_message(&mut self, message: RosterMessage) -> Task<Message> {
        match message {
            // Toolbar
            RosterMessage::SearchChanged(query) => {
                self.state.discard_edit();
                self.state.roster.set_query(query);
            }

            RosterMessage::DeleteSelected => {
                self.state.discard_edit();
                self.state.roster.delete_selected();
            }

            RosterMessage::ChangeRoleClicked => {
                if self.state.roster.has_selection() {
                    self.state.role_dialog = Some(RoleDialog::default());
                }
            }

            // Table
            RosterMessage::RowToggled(position, checked) => {
                self.state.roster.set_row_checked(position, checked);
            }

            RosterMessage::SelectAllToggled(checked) => {
                self.state.roster.set_all_checked(checked);
            }

            RosterMessage::EditRow(id) => {
                // Starting a new edit discards any unsaved draft.
                match self.state.roster.member(&id) {
                    Some(record) => self.state.edit = Some(EditDraft::from_record(record)),
                    None => tracing::debug!(%id, "edit ignored, member gone"),
                }
            }

            RosterMessage::DeleteRow(id) => {
                if self.state.is_editing(&id) {
                    self.state.discard_edit();
                }
                if let Err(error) = self.state.roster.remove(&id) {
                    // Stale id: absorbed as a no-op.
                    tracing::debug!(%error, "delete ignored");
                }
            }

            // Inline editor
            RosterMessage::EditNameChanged(value) => {
                if let Some(draft) = &mut self.state.edit {
                    draft.name = value;
                }
            }

            RosterMessage::EditEmailChanged(value) => {
                if let Some(draft) = &mut self.state.edit {
                    draft.email = value;
                }
            }

            RosterMessage::EditRoleChanged(value) => {
                if let Some(draft) = &mut self.state.edit {
                    draft.role = value;
                }
            }

            RosterMessage::EditSaved => {
                if let Some(EditDraft { id, name, email, role }) = self.state.edit.take() {
                    if let Err(error) = self.state.roster.apply_edit(&id, name, email, role) {
                        tracing::debug!(%error, "save ignored");
                    }
                }
            }

            RosterMessage::EditCancelled => self.state.discard_edit(),

            // Pagination footer
            RosterMessage::RowsPerPageChanged(rows_per_page) => {
                self.state.discard_edit();
                self.state.roster.set_rows_per_page(rows_per_page);
            }

            RosterMessage::FirstPage => {
                self.state.discard_edit();
                self.state.roster.first_page();
            }

            RosterMessage::PreviousPage => {
                self.state.discard_edit();
                self.state.roster.previous_page();
            }

            RosterMessage::NextPage => {
                self.state.discard_edit();
                self.state.roster.next_page();
            }

            RosterMessage::LastPage => {
                self.state.discard_edit();
                self.state.roster.last_page();
            }
        }

        Task::none()
    }

    /// Handle role-change dialog messages.
    fn handle_dialog_message(&mut self, message: DialogMessage) -> Task<Message> {
        match message {
            DialogMessage::RoleChanged(role) => {
                if let Some(dialog) = &mut self.state.role_dialog {
                    dialog.role = role;
                }
            }

            DialogMessage::Apply => {
                if let Some(dialog) = self.state.role_dialog.take() {
                    // Blank input behaves like a cancelled prompt: no-op.
                    let changed = self.state.roster.assign_role_to_selected(&dialog.role);
                    if changed == 0 {
                        tracing::debug!("role change skipped");
                    }
                }
            }

            DialogMessage::Cancel => self.state.role_dialog = None,
        }

        Task::none()
    }

    /// Escape closes the dialog, or failing that cancels an edit.
    fn handle_key_press(&mut self, key: keyboard::Key) -> Task<Message> {
        if matches!(key, keyboard::Key::Named(keyboard::key::Named::Escape)) {
            if self.state.role_dialog.is_some() {
                self.state.role_dialog = None;
            } else if self.state.edit.is_some() {
                self.state.discard_edit();
            }
        }
        Task::none()
    }

    /// Render the view for the current state.
    pub fn view(&self) -> Element<'_, Message> {
        view_app(&self.state)
    }

    /// Window title.
    pub fn title(&self) -> String {
        match &self.state.phase {
            LoadPhase::Ready => {
                format!("Roster Desk - {} members", self.state.roster.directory().len())
            }
            _ => "Roster Desk".to_string(),
        }
    }

    /// Application theme.
    pub fn theme(&self) -> Theme {
        app_theme()
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, .. } => Message::KeyPressed(key),
            _ => Message::Noop,
        })
    }
}
