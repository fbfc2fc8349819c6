//! The member record store.

use roster_model::{MemberId, MemberRecord};
use thiserror::Error;

use crate::filter;

/// Errors from directory mutations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The target id is no longer present, e.g. the row was deleted earlier
    /// in the session. Callers treat this as a no-op.
    #[error("no member with id {id}")]
    UnknownMember { id: MemberId },
}

/// All loaded members plus the view derived from the active search query.
///
/// The view is a list of ids into the full set, in the records' original
/// order, so view entries are identical-by-id with full-set records by
/// construction. The full set is replaced only by [`Directory::load`];
/// every other mutation goes through a method here, which keeps the view
/// and the full set consistent — deletions in particular are applied to
/// both in one pass, so clearing the search never resurrects a deleted
/// record.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    members: Vec<MemberRecord>,
    view: Vec<MemberId>,
    query: String,
}

impl Directory {
    /// Replace the full set. The view resets to all records and the query
    /// clears.
    pub fn load(&mut self, records: Vec<MemberRecord>) {
        self.members = records;
        self.query = String::new();
        self.view = filter::filter(&self.members, &self.query);
    }

    /// Every loaded member, independent of the search query.
    pub fn members(&self) -> &[MemberRecord] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look a member up by id in the full set.
    pub fn member(&self, id: &MemberId) -> Option<&MemberRecord> {
        self.members.iter().find(|member| &member.id == id)
    }

    /// Ids of the records matching the active query, in original order.
    pub fn view(&self) -> &[MemberId] {
        &self.view
    }

    pub fn view_len(&self) -> usize {
        self.view.len()
    }

    /// The record at an absolute position within the view.
    pub fn visible_member(&self, index: usize) -> Option<&MemberRecord> {
        self.view.get(index).and_then(|id| self.member(id))
    }

    /// The active search query, as typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Install a new query and re-derive the view from the full set.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.view = filter::filter(&self.members, &self.query);
    }

    /// Remove a single member from the full set and the view.
    pub fn remove(&mut self, id: &MemberId) -> Result<(), DirectoryError> {
        if self.member(id).is_none() {
            return Err(DirectoryError::UnknownMember { id: id.clone() });
        }
        self.members.retain(|member| &member.id != id);
        self.view.retain(|view_id| view_id != id);
        Ok(())
    }

    /// Remove every listed member in one pass over the full set and the
    /// view (never one-at-a-time, which would shift indices mid-removal).
    /// Returns how many records were removed.
    pub fn remove_many(&mut self, ids: &[MemberId]) -> usize {
        let before = self.members.len();
        self.members.retain(|member| !ids.contains(&member.id));
        self.view.retain(|view_id| !ids.contains(view_id));
        before - self.members.len()
    }

    /// Write `role` onto every listed member, as entered (free text, no
    /// whitelist). Returns how many records changed.
    pub fn assign_role(&mut self, ids: &[MemberId], role: &str) -> usize {
        let mut changed = 0;
        for member in &mut self.members {
            if ids.contains(&member.id) {
                member.role = role.to_string();
                changed += 1;
            }
        }
        changed
    }

    /// Write edited fields back onto the record with `id`, preserving the
    /// id itself. No format validation is applied. The view is not
    /// re-derived: an edited row stays visible until the query next
    /// changes, even if it no longer matches.
    pub fn apply_edit(
        &mut self,
        id: &MemberId,
        name: String,
        email: String,
        role: String,
    ) -> Result<(), DirectoryError> {
        let member = self
            .members
            .iter_mut()
            .find(|member| &member.id == id)
            .ok_or_else(|| DirectoryError::UnknownMember { id: id.clone() })?;
        member.name = name;
        member.email = email;
        member.role = role;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> Directory {
        let mut directory = Directory::default();
        directory.load(vec![
            MemberRecord::new("1", "Ann", "a@x.com", "admin"),
            MemberRecord::new("2", "Bo", "b@x.com", "member"),
            MemberRecord::new("3", "Cara", "c@x.com", "member"),
        ]);
        directory
    }

    #[test]
    fn load_resets_view_and_query() {
        let mut directory = loaded();
        directory.set_query("admin");
        assert_eq!(directory.view_len(), 1);

        directory.load(vec![MemberRecord::new("9", "Zed", "z@x.com", "member")]);
        assert_eq!(directory.query(), "");
        assert_eq!(directory.view(), &[MemberId::new("9")]);
    }

    #[test]
    fn view_ids_always_exist_in_full_set() {
        let mut directory = loaded();
        directory.set_query("member");
        for id in directory.view() {
            assert!(directory.member(id).is_some());
        }
    }

    #[test]
    fn remove_affects_full_set_and_view() {
        let mut directory = loaded();
        directory.remove(&"2".into()).expect("remove");
        assert_eq!(directory.len(), 2);
        assert_eq!(directory.view_len(), 2);

        // Clearing the search must not resurrect the deleted record.
        directory.set_query("");
        assert!(directory.member(&"2".into()).is_none());
        assert_eq!(directory.view_len(), 2);
    }

    #[test]
    fn remove_unknown_id_is_an_error() {
        let mut directory = loaded();
        let err = directory.remove(&"99".into()).unwrap_err();
        assert_eq!(err, DirectoryError::UnknownMember { id: "99".into() });
        assert_eq!(directory.len(), 3);
    }

    #[test]
    fn remove_many_removes_in_one_pass() {
        let mut directory = loaded();
        let removed = directory.remove_many(&["1".into(), "3".into()]);
        assert_eq!(removed, 2);
        assert_eq!(directory.view(), &[MemberId::new("2")]);
    }

    #[test]
    fn assign_role_writes_free_text() {
        let mut directory = loaded();
        let changed = directory.assign_role(&["1".into(), "2".into()], "editor");
        assert_eq!(changed, 2);
        assert_eq!(directory.member(&"1".into()).unwrap().role, "editor");
        assert_eq!(directory.member(&"3".into()).unwrap().role, "member");
    }

    #[test]
    fn apply_edit_preserves_id_and_skips_revalidation() {
        let mut directory = loaded();
        directory.set_query("ann");
        assert_eq!(directory.view_len(), 1);

        directory
            .apply_edit(&"1".into(), "Zoe".into(), "zoe@x.com".into(), "member".into())
            .expect("edit");

        let member = directory.member(&"1".into()).unwrap();
        assert_eq!(member.name, "Zoe");
        assert_eq!(member.email, "zoe@x.com");
        // The edited row no longer matches "ann", but it stays visible until
        // the query next changes.
        assert_eq!(directory.view_len(), 1);
        directory.set_query("ann");
        assert_eq!(directory.view_len(), 0);
    }

    #[test]
    fn apply_edit_unknown_id_is_an_error() {
        let mut directory = loaded();
        let err = directory
            .apply_edit(&"99".into(), "X".into(), "x@x.com".into(), "member".into())
            .unwrap_err();
        assert_eq!(err, DirectoryError::UnknownMember { id: "99".into() });
    }
}
