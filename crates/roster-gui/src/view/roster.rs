//! Roster screen: header, toolbar, member table, pagination footer.

use iced::widget::{
    Space, button, checkbox, column, container, pick_list, row, rule, scrollable, text, text_input,
};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use roster_directory::ROWS_PER_PAGE_OPTIONS;
use roster_model::MemberRecord;

use crate::message::{Message, RosterMessage};
use crate::state::{AppState, EditDraft};
use crate::theme::{
    GRAY_50, GRAY_500, GRAY_600, GRAY_900, PRIMARY_500, SPACING_MD, SPACING_SM,
    SPACING_XS, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y, WHITE, button_danger, button_ghost,
    button_primary, button_secondary, card, text_input_default,
};

// Column widths, shared by the header and every row so the grid lines up.
const SELECT_COLUMN: Length = Length::Fixed(40.0);
const NAME_COLUMN: Length = Length::FillPortion(3);
const EMAIL_COLUMN: Length = Length::FillPortion(4);
const ROLE_COLUMN: Length = Length::FillPortion(2);
const ACTIONS_COLUMN: Length = Length::Fixed(180.0);

/// The main roster screen.
pub fn view_roster(state: &AppState) -> Element<'_, Message> {
    column![
        view_heading(state),
        view_toolbar(state),
        view_table(state),
        view_footer(state),
    ]
    .spacing(SPACING_MD)
    .padding(SPACING_MD)
    .into()
}

fn view_heading(state: &AppState) -> Element<'_, Message> {
    let total = state.roster.directory().len();
    let visible = state.roster.view_len();

    let count = if visible == total {
        format!("{total} members")
    } else {
        format!("{visible} of {total} members")
    };

    row![
        text("Members").size(20).color(GRAY_900),
        Space::new().width(Length::Fill),
        text(count).size(13).color(GRAY_500),
    ]
    .align_y(Alignment::Center)
    .into()
}

fn view_toolbar(state: &AppState) -> Element<'_, Message> {
    let search_input = text_input("Search by name, email, or role...", state.roster.query())
        .on_input(|query| Message::Roster(RosterMessage::SearchChanged(query)))
        .padding([8.0, 12.0])
        .size(13)
        .width(Length::Fill)
        .style(text_input_default);

    let has_selection = state.roster.has_selection();

    let delete_button = button(
        row![
            lucide::trash().size(14),
            Space::new().width(SPACING_XS),
            text("Delete selected").size(13),
        ]
        .align_y(Alignment::Center),
    )
    .on_press_maybe(has_selection.then_some(Message::Roster(RosterMessage::DeleteSelected)))
    .padding([8.0, 14.0])
    .style(button_danger);

    let role_button = button(
        row![
            lucide::users().size(14),
            Space::new().width(SPACING_XS),
            text("Change role").size(13),
        ]
        .align_y(Alignment::Center),
    )
    .on_press_maybe(has_selection.then_some(Message::Roster(RosterMessage::ChangeRoleClicked)))
    .padding([8.0, 14.0])
    .style(button_secondary);

    row![search_input, role_button, delete_button]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center)
        .into()
}

// =============================================================================
// TABLE
// =============================================================================

fn view_table(state: &AppState) -> Element<'_, Message> {
    let page_rows: Vec<&MemberRecord> = state.roster.page_rows().collect();

    let mut body = column![].spacing(0);

    if page_rows.is_empty() {
        let notice = if state.roster.query().trim().is_empty() {
            "No members loaded."
        } else {
            "No members match the current search."
        };
        body = body.push(
            container(text(notice).size(13).color(GRAY_500))
                .width(Length::Fill)
                .center_x(Length::Fill)
                .padding(SPACING_MD),
        );
    }

    for (position, member) in page_rows.iter().enumerate() {
        let element = match &state.edit {
            Some(draft) if draft.id == member.id => view_edit_row(state, draft, position),
            _ => view_display_row(state, position, member),
        };
        body = body.push(element);
    }

    container(column![
        view_table_header(state),
        rule::horizontal(1),
        scrollable(body).height(Length::Fill),
    ])
    .style(card)
    .height(Length::Fill)
    .into()
}

fn view_table_header(state: &AppState) -> Element<'_, Message> {
    let select_all = checkbox(state.roster.all_page_rows_checked())
        .on_toggle(|checked| Message::Roster(RosterMessage::SelectAllToggled(checked)))
        .size(16);

    let header = row![
        cell(select_all.into(), SELECT_COLUMN),
        cell(header_label("Name"), NAME_COLUMN),
        cell(header_label("Email"), EMAIL_COLUMN),
        cell(header_label("Role"), ROLE_COLUMN),
        cell(header_label("Actions"), ACTIONS_COLUMN),
    ]
    .align_y(Alignment::Center);

    container(header)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(GRAY_50.into()),
            ..Default::default()
        })
        .into()
}

fn header_label(label: &str) -> Element<'_, Message> {
    text(label).size(12).color(GRAY_500).into()
}

fn view_display_row<'a>(
    state: &'a AppState,
    position: usize,
    member: &'a MemberRecord,
) -> Element<'a, Message> {
    let select = checkbox(state.roster.is_row_checked(position))
        .on_toggle(move |checked| Message::Roster(RosterMessage::RowToggled(position, checked)))
        .size(16);

    let edit_button = button(
        row![
            lucide::pencil().size(13),
            Space::new().width(SPACING_XS),
            text("Edit").size(12),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Roster(RosterMessage::EditRow(member.id.clone())))
    .padding([4.0, 10.0])
    .style(button_ghost);

    let delete_button = button(
        row![
            lucide::trash().size(13),
            Space::new().width(SPACING_XS),
            text("Delete").size(12),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Roster(RosterMessage::DeleteRow(member.id.clone())))
    .padding([4.0, 10.0])
    .style(button_ghost);

    let cells = row![
        cell(select.into(), SELECT_COLUMN),
        cell(
            text(member.name.as_str()).size(13).color(GRAY_900).into(),
            NAME_COLUMN
        ),
        cell(
            text(member.email.as_str()).size(13).color(GRAY_600).into(),
            EMAIL_COLUMN
        ),
        cell(
            text(member.display_role()).size(13).color(GRAY_600).into(),
            ROLE_COLUMN
        ),
        cell(
            row![edit_button, delete_button].spacing(SPACING_XS).into(),
            ACTIONS_COLUMN
        ),
    ]
    .align_y(Alignment::Center);

    let is_even = position % 2 == 0;
    container(cells)
        .width(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(if is_even { WHITE } else { GRAY_50 }.into()),
            ..Default::default()
        })
        .into()
}

/// The editable rendition of a row: the three fields as inputs plus
/// Save/Cancel. Every other row stays in display mode.
fn view_edit_row<'a>(
    state: &'a AppState,
    draft: &'a EditDraft,
    position: usize,
) -> Element<'a, Message> {
    let select = checkbox(state.roster.is_row_checked(position))
        .on_toggle(move |checked| Message::Roster(RosterMessage::RowToggled(position, checked)))
        .size(16);

    let name_input = text_input("Name", &draft.name)
        .on_input(|value| Message::Roster(RosterMessage::EditNameChanged(value)))
        .padding([6.0, 8.0])
        .size(13)
        .style(text_input_default);

    let email_input = text_input("Email", &draft.email)
        .on_input(|value| Message::Roster(RosterMessage::EditEmailChanged(value)))
        .padding([6.0, 8.0])
        .size(13)
        .style(text_input_default);

    let role_input = text_input("Role", &draft.role)
        .on_input(|value| Message::Roster(RosterMessage::EditRoleChanged(value)))
        .on_submit(Message::Roster(RosterMessage::EditSaved))
        .padding([6.0, 8.0])
        .size(13)
        .style(text_input_default);

    let save_button = button(
        row![
            lucide::check().size(13),
            Space::new().width(SPACING_XS),
            text("Save").size(12),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Roster(RosterMessage::EditSaved))
    .padding([4.0, 10.0])
    .style(button_primary);

    let cancel_button = button(
        row![
            lucide::x().size(13),
            Space::new().width(SPACING_XS),
            text("Cancel").size(12),
        ]
        .align_y(Alignment::Center),
    )
    .on_press(Message::Roster(RosterMessage::EditCancelled))
    .padding([4.0, 10.0])
    .style(button_secondary);

    let cells = row![
        cell(select.into(), SELECT_COLUMN),
        cell(name_input.into(), NAME_COLUMN),
        cell(email_input.into(), EMAIL_COLUMN),
        cell(role_input.into(), ROLE_COLUMN),
        cell(
            row![save_button, cancel_button].spacing(SPACING_XS).into(),
            ACTIONS_COLUMN
        ),
    ]
    .align_y(Alignment::Center);

    container(cells)
        .width(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(iced::Color { a: 0.08, ..PRIMARY_500 }.into()),
            ..Default::default()
        })
        .into()
}

fn cell(content: Element<'_, Message>, width: Length) -> Element<'_, Message> {
    container(content)
        .width(width)
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .into()
}

// =============================================================================
// PAGINATION FOOTER
// =============================================================================

fn view_footer(state: &AppState) -> Element<'_, Message> {
    let roster = &state.roster;

    let rows_picker = row![
        text("Rows per page").size(12).color(GRAY_600),
        pick_list(
            &ROWS_PER_PAGE_OPTIONS[..],
            Some(roster.rows_per_page()),
            |rows| Message::Roster(RosterMessage::RowsPerPageChanged(rows)),
        )
        .text_size(12)
        .padding([4.0, 8.0]),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let at_first = roster.at_first_page();
    let at_last = roster.at_last_page();

    let page_info = text(format!(
        "Page {} of {} ({} members)",
        roster.page(),
        roster.total_pages(),
        roster.view_len(),
    ))
    .size(12)
    .color(GRAY_500);

    let navigation = row![
        page_button(lucide::chevrons_left().size(14).into(), !at_first, RosterMessage::FirstPage),
        page_button(lucide::chevron_left().size(14).into(), !at_first, RosterMessage::PreviousPage),
        page_info,
        page_button(lucide::chevron_right().size(14).into(), !at_last, RosterMessage::NextPage),
        page_button(lucide::chevrons_right().size(14).into(), !at_last, RosterMessage::LastPage),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    row![rows_picker, Space::new().width(Length::Fill), navigation]
        .align_y(Alignment::Center)
        .into()
}

fn page_button(
    icon: Element<'static, Message>,
    enabled: bool,
    message: RosterMessage,
) -> Element<'static, Message> {
    button(icon)
        .on_press_maybe(enabled.then_some(Message::Roster(message)))
        .padding([4.0, 10.0])
        .style(button_ghost)
        .into()
}
