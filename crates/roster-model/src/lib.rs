//! Member record types for Roster Desk.
//!
//! The roster endpoint delivers a flat JSON array of member objects:
//! `{"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com",
//! "role": "member"}`. These types are shared by the directory state
//! machine and the GUI.

use std::fmt;

use serde::Deserialize;

// =============================================================================
// MEMBER ID
// =============================================================================

/// Opaque member identifier.
///
/// Unique across the loaded roster and stable for the record's lifetime;
/// no operation ever rewrites an id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Create an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// MEMBER RECORD
// =============================================================================

/// A single member row as delivered by the roster endpoint.
///
/// `role` is free text by convention ("admin", "member"); it is stored as
/// received and only capitalized for display via [`display_role`]. Unknown
/// payload fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberRecord {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl MemberRecord {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// The member's role, capitalized for display.
    pub fn display_role(&self) -> String {
        display_role(&self.role)
    }
}

/// Capitalize a role for display: first character uppercased, the rest
/// lowercased ("admin" -> "Admin", "MEMBER" -> "Member").
pub fn display_role(role: &str) -> String {
    let mut chars = role.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_role_capitalizes() {
        assert_eq!(display_role("admin"), "Admin");
        assert_eq!(display_role("MEMBER"), "Member");
        assert_eq!(display_role("editor"), "Editor");
    }

    #[test]
    fn display_role_handles_empty() {
        assert_eq!(display_role(""), "");
    }

    #[test]
    fn member_id_display_matches_raw() {
        let id = MemberId::new("42");
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.as_str(), "42");
    }
}
