//! GUI-facing error types.

use thiserror::Error;

/// Errors surfaced to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuiError {
    /// The roster fetch failed (network error, bad status, or a payload
    /// that did not decode).
    #[error("Failed to load the member roster: {reason}")]
    RosterLoad {
        /// Description of what went wrong.
        reason: String,
    },
}

impl GuiError {
    /// Create a roster load error from any error source.
    pub fn roster_load(err: impl std::fmt::Display) -> Self {
        Self::RosterLoad {
            reason: err.to_string(),
        }
    }

    /// A user-friendly suggestion for resolving this error.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::RosterLoad { .. } => "Check your network connection, then retry.",
        }
    }
}
