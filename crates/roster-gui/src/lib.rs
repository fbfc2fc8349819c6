//! Roster Desk - GUI library.
//!
//! Desktop admin console for browsing, editing, and bulk-managing the
//! member roster. Built with Iced 0.14 using the Elm architecture
//! (State, Message, Update, View); all roster semantics live in
//! `roster-directory`, this crate only wires them to widgets.

pub mod app;
pub mod error;
pub mod message;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
