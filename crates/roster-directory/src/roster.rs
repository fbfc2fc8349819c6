//! The roster state machine.
//!
//! [`Roster`] is the single controller the GUI talks to. It owns the record
//! store, the pager, and the page selection, and it sequences every
//! operation so the cross-component invariants hold before the next render:
//! a query or page-size change restarts at page 1, a shrinking view clamps
//! the page, and any mutation clears the page-scoped selection.

use roster_model::{MemberId, MemberRecord};

use crate::directory::{Directory, DirectoryError};
use crate::pager::Pager;
use crate::selection::PageSelection;

#[derive(Debug, Clone, Default)]
pub struct Roster {
    directory: Directory,
    pager: Pager,
    selection: PageSelection,
}

impl Roster {
    // =========================================================================
    // LOADING
    // =========================================================================

    /// Install a freshly fetched record set and start over: view = full
    /// set, page 1, nothing selected.
    pub fn load(&mut self, records: Vec<MemberRecord>) {
        tracing::debug!(count = records.len(), "loading roster");
        self.directory.load(records);
        self.pager.reset();
        self.selection.clear();
    }

    // =========================================================================
    // READ ACCESS
    // =========================================================================

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn query(&self) -> &str {
        self.directory.query()
    }

    pub fn view_len(&self) -> usize {
        self.directory.view_len()
    }

    pub fn member(&self, id: &MemberId) -> Option<&MemberRecord> {
        self.directory.member(id)
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn rows_per_page(&self) -> usize {
        self.pager.rows_per_page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.view_len())
    }

    pub fn at_first_page(&self) -> bool {
        self.pager.at_first()
    }

    pub fn at_last_page(&self) -> bool {
        self.pager.at_last(self.view_len())
    }

    /// The records on the current page, top to bottom.
    pub fn page_rows(&self) -> impl Iterator<Item = &MemberRecord> {
        self.pager
            .window(self.view_len())
            .filter_map(|index| self.directory.visible_member(index))
    }

    /// How many rows the current page renders.
    pub fn page_row_count(&self) -> usize {
        self.pager.window(self.view_len()).len()
    }

    // =========================================================================
    // FILTERING
    // =========================================================================

    /// Install a new search query. The view is re-derived and pagination
    /// restarts at page 1 so a shrunken result set can never leave the UI
    /// on an out-of-range page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.directory.set_query(query);
        self.pager.reset();
        self.selection.clear();
    }

    // =========================================================================
    // PAGINATION
    // =========================================================================

    pub fn set_rows_per_page(&mut self, rows_per_page: usize) {
        self.pager.set_rows_per_page(rows_per_page);
        self.selection.clear();
    }

    pub fn first_page(&mut self) {
        self.pager.first();
        self.selection.clear();
    }

    pub fn previous_page(&mut self) {
        self.pager.previous();
        self.selection.clear();
    }

    pub fn next_page(&mut self) {
        self.pager.next(self.view_len());
        self.selection.clear();
    }

    pub fn last_page(&mut self) {
        self.pager.last(self.view_len());
        self.selection.clear();
    }

    // =========================================================================
    // SELECTION
    // =========================================================================

    pub fn is_row_checked(&self, position: usize) -> bool {
        self.selection.is_checked(position)
    }

    pub fn set_row_checked(&mut self, position: usize, checked: bool) {
        if position < self.page_row_count() {
            self.selection.set(position, checked);
        }
    }

    /// Check or uncheck every row on the current page.
    pub fn set_all_checked(&mut self, checked: bool) {
        if checked {
            self.selection.select_all(self.page_row_count());
        } else {
            self.selection.clear();
        }
    }

    pub fn all_page_rows_checked(&self) -> bool {
        self.selection.all_checked(self.page_row_count())
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Ids of the currently checked rows, resolved fresh against the live
    /// view.
    pub fn selected_ids(&self) -> Vec<MemberId> {
        self.selection.resolve(self.directory.view(), &self.pager)
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Delete every checked row in one pass. Returns how many records were
    /// removed.
    pub fn delete_selected(&mut self) -> usize {
        let ids = self.selected_ids();
        if ids.is_empty() {
            return 0;
        }
        let removed = self.directory.remove_many(&ids);
        tracing::info!(removed, "deleted selected members");
        self.pager.clamp(self.view_len());
        self.selection.clear();
        removed
    }

    /// Write `role` onto every checked row. A blank (or whitespace-only)
    /// role is the cancelled-prompt case: nothing is mutated and the
    /// selection survives. Returns how many records changed.
    pub fn assign_role_to_selected(&mut self, role: &str) -> usize {
        let role = role.trim();
        if role.is_empty() {
            return 0;
        }
        let ids = self.selected_ids();
        if ids.is_empty() {
            return 0;
        }
        let changed = self.directory.assign_role(&ids, role);
        tracing::info!(changed, role, "changed role of selected members");
        self.selection.clear();
        changed
    }

    /// Delete a single row by id.
    pub fn remove(&mut self, id: &MemberId) -> Result<(), DirectoryError> {
        self.directory.remove(id)?;
        tracing::info!(%id, "deleted member");
        self.pager.clamp(self.view_len());
        self.selection.clear();
        Ok(())
    }

    /// Save an inline row edit. The id is preserved; an unknown id bubbles
    /// up as [`DirectoryError::UnknownMember`] for the caller to absorb.
    pub fn apply_edit(
        &mut self,
        id: &MemberId,
        name: String,
        email: String,
        role: String,
    ) -> Result<(), DirectoryError> {
        self.directory.apply_edit(id, name, email, role)?;
        tracing::debug!(%id, "saved member edit");
        self.selection.clear();
        Ok(())
    }
}
