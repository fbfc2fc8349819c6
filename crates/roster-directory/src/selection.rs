//! Page-scoped row selection.
//!
//! A selection is a set of checkbox positions within the currently rendered
//! page window, 0-indexed from the top of the page. It is transient by
//! design: any change to the view, the page, or the page size invalidates
//! it, and bulk actions resolve positions to member ids freshly at the
//! moment they run.

use std::collections::BTreeSet;

use roster_model::MemberId;

use crate::pager::Pager;

/// Checked row positions within the current page window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSelection {
    checked: BTreeSet<usize>,
}

impl PageSelection {
    pub fn clear(&mut self) {
        self.checked.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_checked(&self, position: usize) -> bool {
        self.checked.contains(&position)
    }

    /// Check or uncheck a single row position.
    pub fn set(&mut self, position: usize, checked: bool) {
        if checked {
            self.checked.insert(position);
        } else {
            self.checked.remove(&position);
        }
    }

    /// Check every row currently rendered on the page. Page-scoped: this
    /// never reaches past the `row_count` rows actually on screen.
    pub fn select_all(&mut self, row_count: usize) {
        self.checked = (0..row_count).collect();
    }

    /// Whether every one of the page's `row_count` rows is checked. An
    /// empty page is never "all checked".
    pub fn all_checked(&self, row_count: usize) -> bool {
        row_count > 0 && (0..row_count).all(|position| self.checked.contains(&position))
    }

    /// Resolve checked positions to member ids through the current page
    /// window: `absolute = (page - 1) * rows_per_page + position`.
    /// Positions beyond the page size or past the view end are ignored.
    pub fn resolve(&self, view: &[MemberId], pager: &Pager) -> Vec<MemberId> {
        let offset = (pager.page() - 1) * pager.rows_per_page();
        self.checked
            .iter()
            .filter(|&&position| position < pager.rows_per_page())
            .filter_map(|&position| view.get(offset + position))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(ids: &[&str]) -> Vec<MemberId> {
        ids.iter().map(|id| MemberId::new(*id)).collect()
    }

    #[test]
    fn resolves_positions_through_the_page_offset() {
        let view = view(&["a", "b", "c", "d", "e"]);
        let mut pager = Pager::new(2);
        pager.next(view.len()); // page 2 -> rows c, d

        let mut selection = PageSelection::default();
        selection.set(0, true);
        selection.set(1, true);

        assert_eq!(selection.resolve(&view, &pager), vec!["c".into(), "d".into()]);
    }

    #[test]
    fn ignores_positions_past_the_view_end() {
        let view = view(&["a", "b", "c"]);
        let mut pager = Pager::new(2);
        pager.next(view.len()); // page 2 holds only "c"

        let mut selection = PageSelection::default();
        selection.set(0, true);
        selection.set(1, true); // no row here

        assert_eq!(selection.resolve(&view, &pager), vec![MemberId::new("c")]);
    }

    #[test]
    fn ignores_positions_past_the_page_size() {
        let view = view(&["a", "b", "c", "d"]);
        let pager = Pager::new(2);

        let mut selection = PageSelection::default();
        selection.set(3, true); // beyond the 2-row window

        assert!(selection.resolve(&view, &pager).is_empty());
    }

    #[test]
    fn select_all_is_page_scoped() {
        let mut selection = PageSelection::default();
        selection.select_all(3);
        assert_eq!(selection.len(), 3);
        assert!(selection.all_checked(3));
        assert!(!selection.all_checked(4));
    }

    #[test]
    fn empty_page_is_never_all_checked() {
        let selection = PageSelection::default();
        assert!(!selection.all_checked(0));
    }

    #[test]
    fn unchecking_removes_a_position() {
        let mut selection = PageSelection::default();
        selection.set(1, true);
        selection.set(1, false);
        assert!(selection.is_empty());
    }
}
