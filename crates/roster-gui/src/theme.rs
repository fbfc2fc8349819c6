//! Theme constants and widget styles.
//!
//! A single light theme. Style functions receive `&Theme` and pull accent
//! colors from the extended palette, so the constants below only cover the
//! neutrals and spacing the widgets share.

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Small radius - buttons, inputs
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Horizontal padding inside a table cell
pub const TABLE_CELL_PADDING_X: f32 = 12.0;

/// Vertical padding inside a table cell
pub const TABLE_CELL_PADDING_Y: f32 = 8.0;

// =============================================================================
// COLORS
// =============================================================================

pub const WHITE: Color = Color::WHITE;
pub const GRAY_50: Color = Color::from_rgb(0.98, 0.98, 0.99);
pub const GRAY_100: Color = Color::from_rgb(0.95, 0.95, 0.96);
pub const GRAY_200: Color = Color::from_rgb(0.90, 0.90, 0.92);
pub const GRAY_400: Color = Color::from_rgb(0.74, 0.75, 0.78);
pub const GRAY_500: Color = Color::from_rgb(0.55, 0.57, 0.60);
pub const GRAY_600: Color = Color::from_rgb(0.42, 0.44, 0.48);
pub const GRAY_900: Color = Color::from_rgb(0.10, 0.10, 0.12);

/// Accent blue.
pub const PRIMARY_500: Color = Color::from_rgb(0.15, 0.39, 0.92);
pub const PRIMARY_600: Color = Color::from_rgb(0.11, 0.31, 0.85);

pub const SUCCESS: Color = Color::from_rgb(0.20, 0.70, 0.40);
pub const WARNING: Color = Color::from_rgb(0.95, 0.65, 0.05);
pub const DANGER: Color = Color::from_rgb(0.80, 0.22, 0.20);

// =============================================================================
// THEME CREATION
// =============================================================================

/// The application theme.
pub fn app_theme() -> Theme {
    Theme::custom(
        "Roster Light".to_string(),
        iced::theme::Palette {
            background: WHITE,
            text: GRAY_900,
            primary: PRIMARY_500,
            success: SUCCESS,
            warning: WARNING,
            danger: DANGER,
        },
    )
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: Some(palette.primary.base.color.into()),
            text_color: WHITE,
            border: rounded_border(Color::TRANSPARENT, 0.0),
            shadow: soft_shadow(),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(PRIMARY_600.into()),
            text_color: WHITE,
            border: rounded_border(Color::TRANSPARENT, 0.0),
            shadow: soft_shadow(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(GRAY_200.into()),
            text_color: GRAY_400,
            border: rounded_border(Color::TRANSPARENT, 0.0),
            ..Default::default()
        },
    }
}

/// Secondary button style - bordered, neutral actions.
pub fn button_secondary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(WHITE.into()),
            text_color: GRAY_600,
            border: rounded_border(GRAY_200, 1.0),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(GRAY_50.into()),
            text_color: GRAY_900,
            border: rounded_border(GRAY_400, 1.0),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(GRAY_50.into()),
            text_color: GRAY_400,
            border: rounded_border(GRAY_100, 1.0),
            ..Default::default()
        },
    }
}

/// Ghost button style - borderless, used for table row actions and
/// pagination chevrons.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: palette.primary.base.color,
            border: rounded_border(Color::TRANSPARENT, 0.0),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(GRAY_100.into()),
            text_color: palette.primary.base.color,
            border: rounded_border(Color::TRANSPARENT, 0.0),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: GRAY_400,
            border: rounded_border(Color::TRANSPARENT, 0.0),
            ..Default::default()
        },
    }
}

/// Danger button style - destructive actions.
pub fn button_danger(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(DANGER.into()),
            text_color: WHITE,
            border: rounded_border(Color::TRANSPARENT, 0.0),
            shadow: soft_shadow(),
            ..Default::default()
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Color::from_rgb(0.70, 0.17, 0.15).into()),
            text_color: WHITE,
            border: rounded_border(Color::TRANSPARENT, 0.0),
            shadow: soft_shadow(),
            ..Default::default()
        },
        button::Status::Disabled => button::Style {
            background: Some(GRAY_200.into()),
            text_color: GRAY_400,
            border: rounded_border(Color::TRANSPARENT, 0.0),
            ..Default::default()
        },
    }
}

// =============================================================================
// INPUT & CONTAINER STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        text_input::Status::Focused { .. } => palette.primary.base.color,
        text_input::Status::Hovered => GRAY_400,
        _ => GRAY_200,
    };

    text_input::Style {
        background: WHITE.into(),
        border: rounded_border(border_color, 1.0),
        icon: GRAY_500,
        placeholder: GRAY_400,
        value: GRAY_900,
        selection: Color { a: 0.25, ..palette.primary.base.color },
    }
}

/// Card container: white surface with a hairline border.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(WHITE.into()),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: GRAY_200,
        },
        shadow: soft_shadow(),
        ..Default::default()
    }
}

/// Dimmed backdrop behind the modal dialog.
pub fn modal_backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color { a: 0.45, ..GRAY_900 }.into()),
        ..Default::default()
    }
}

fn rounded_border(color: Color, width: f32) -> Border {
    Border {
        radius: BORDER_RADIUS_SM.into(),
        width,
        color,
    }
}

fn soft_shadow() -> Shadow {
    Shadow {
        color: Color { a: 0.10, ..GRAY_900 },
        offset: Vector::new(0.0, 1.0),
        blur_radius: 2.0,
    }
}
