//! Roster Desk - Desktop admin console for the member roster.
//!
//! Loads the member list once over HTTP, then everything - search,
//! pagination, inline editing, bulk delete and role changes - happens in
//! memory for the lifetime of the session.

use iced::window;
use iced::Size;
use roster_gui::App;

/// Application entry point.
pub fn main() -> iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Starting Roster Desk");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .subscription(App::subscription)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1100.0, 720.0),
            min_size: Some(Size::new(880.0, 540.0)),
            ..Default::default()
        })
        .run()
}
