//! In-memory member directory for Roster Desk.
//!
//! Everything here is a pure state machine over the loaded roster: no UI
//! types, no I/O. The GUI drives it through [`Roster`], which composes the
//! record store ([`Directory`]), page math ([`Pager`]), and the page-scoped
//! checkbox selection ([`PageSelection`]) while keeping their invariants
//! consistent:
//!
//! - the filtered view always holds ids present in the full set, in
//!   original order;
//! - the current page is always within `[1, total_pages]`;
//! - selection never survives a change to the view, the page, or the page
//!   size.
//!
//! Edits are session-lived. Nothing is persisted; reloading the roster
//! starts over.

pub mod directory;
pub mod filter;
pub mod pager;
pub mod roster;
pub mod selection;

pub use directory::{Directory, DirectoryError};
pub use pager::{DEFAULT_ROWS_PER_PAGE, Pager, ROWS_PER_PAGE_OPTIONS};
pub use roster::Roster;
pub use selection::PageSelection;
