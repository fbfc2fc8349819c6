//! Property tests for the pager.

use proptest::prelude::*;
use roster_directory::Pager;

proptest! {
    /// Walking every page from first to last visits each view index exactly
    /// once, in order: no gaps, no overlaps.
    #[test]
    fn page_windows_partition_the_view(len in 0usize..500, rows in 1usize..60) {
        let mut pager = Pager::new(rows);
        let mut visited = Vec::new();
        for _ in 0..pager.total_pages(len) {
            visited.extend(pager.window(len));
            pager.next(len);
        }
        let expected: Vec<usize> = (0..len).collect();
        prop_assert_eq!(visited, expected);
    }

    /// The page stays inside [1, total_pages] across navigation and
    /// arbitrary view shrinkage.
    #[test]
    fn page_stays_in_range(
        len in 0usize..500,
        rows in 1usize..60,
        shrunk in 0usize..500,
        hops in 0usize..6,
    ) {
        let mut pager = Pager::new(rows);
        for _ in 0..hops {
            pager.next(len);
        }
        prop_assert!(pager.page() >= 1);
        prop_assert!(pager.page() <= pager.total_pages(len));

        pager.clamp(shrunk);
        prop_assert!(pager.page() >= 1);
        prop_assert!(pager.page() <= pager.total_pages(shrunk));
    }

    /// An empty view always reports one page and an empty window.
    #[test]
    fn empty_view_is_one_empty_page(rows in 1usize..60) {
        let pager = Pager::new(rows);
        prop_assert_eq!(pager.total_pages(0), 1);
        prop_assert!(pager.window(0).is_empty());
    }
}
