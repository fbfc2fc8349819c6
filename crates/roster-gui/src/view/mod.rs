//! View functions.
//!
//! Pure functions from state to widgets. `view_app` dispatches on the
//! fetch lifecycle and stacks the role-change dialog on top of the roster
//! screen while it is open.

mod dialog;
mod roster;

use iced::widget::{Space, button, center, column, opaque, row, stack, text};
use iced::{Alignment, Element};
use iced_fonts::lucide;

use crate::error::GuiError;
use crate::message::Message;
use crate::state::{AppState, LoadPhase};
use crate::theme::{
    DANGER, GRAY_500, GRAY_600, GRAY_900, SPACING_LG, SPACING_SM, button_primary, modal_backdrop,
};

/// Render the whole application for the current state.
pub fn view_app(state: &AppState) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match &state.phase {
        LoadPhase::Loading => view_loading(),
        LoadPhase::Failed(error) => view_load_error(error),
        LoadPhase::Ready => roster::view_roster(state),
    };

    // Stack the modal on top of the (inert) screen while it is open.
    match &state.role_dialog {
        Some(dialog_state) => stack![
            screen,
            opaque(center(dialog::view_role_dialog(dialog_state)).style(modal_backdrop)),
        ]
        .into(),
        None => screen,
    }
}

/// Shown while the one-shot roster fetch is in flight.
fn view_loading() -> Element<'static, Message> {
    center(
        column![
            lucide::loader().size(32).color(GRAY_500),
            text("Loading members...").size(16).color(GRAY_600),
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center),
    )
    .into()
}

/// Shown when the fetch failed: the error, a suggestion, and a retry
/// button. The loading indicator never lingers past a failure.
fn view_load_error(error: &GuiError) -> Element<'_, Message> {
    let retry_button = button(
        row![
            lucide::refresh_cw().size(14),
            Space::new().width(SPACING_SM),
            text("Retry").size(14),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::RetryLoad)
    .padding([10.0, 20.0])
    .style(button_primary);

    center(
        column![
            lucide::triangle_alert().size(44).color(DANGER),
            text(error.to_string()).size(15).color(GRAY_900),
            text(error.suggestion()).size(13).color(GRAY_600),
            retry_button,
        ]
        .spacing(SPACING_SM)
        .align_x(Alignment::Center)
        .padding(SPACING_LG),
    )
    .into()
}
