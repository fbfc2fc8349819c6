//! Role-change dialog.
//!
//! Replaces a blocking prompt: the dialog collects the new role once and
//! hands it back through `DialogMessage::Apply`. Cancelling, pressing
//! Escape, or applying a blank value changes nothing.

use iced::widget::{Space, button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use crate::message::{DialogMessage, Message};
use crate::state::RoleDialog;
use crate::theme::{
    GRAY_600, GRAY_900, SPACING_LG, SPACING_MD, SPACING_XS, button_primary, button_secondary,
    card, text_input_default,
};

/// Render the role-change dialog card (stacked over a dimmed backdrop).
pub fn view_role_dialog(dialog: &RoleDialog) -> Element<'_, Message> {
    let title = text("Change role").size(18).color(GRAY_900);

    let message = text("Applies to every checked row on this page.")
        .size(13)
        .color(GRAY_600);

    let role_input = text_input("New role (e.g. admin, member)", &dialog.role)
        .on_input(|role| Message::Dialog(DialogMessage::RoleChanged(role)))
        .on_submit(Message::Dialog(DialogMessage::Apply))
        .padding([8.0, 12.0])
        .size(13)
        .style(text_input_default);

    let cancel_button = button(text("Cancel").size(13))
        .on_press(Message::Dialog(DialogMessage::Cancel))
        .padding([8.0, 16.0])
        .style(button_secondary);

    let apply_button = button(
        row![
            lucide::check().size(13),
            Space::new().width(SPACING_XS),
            text("Apply").size(13),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Dialog(DialogMessage::Apply))
    .padding([8.0, 16.0])
    .style(button_primary);

    let buttons = row![
        Space::new().width(Length::Fill),
        cancel_button,
        apply_button,
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    container(column![title, message, role_input, buttons].spacing(SPACING_MD))
        .padding(SPACING_LG)
        .width(420.0)
        .style(card)
        .into()
}
