//! End-to-end tests for the roster state machine.
//!
//! These walk the same flows the GUI drives: load, search, paginate, check
//! rows, edit, and delete.

use roster_directory::{Roster, filter};
use roster_model::{MemberId, MemberRecord, display_role};

fn two_member_roster() -> Vec<MemberRecord> {
    vec![
        MemberRecord::new("1", "Ann", "a@x.com", "admin"),
        MemberRecord::new("2", "Bo", "b@x.com", "member"),
    ]
}

fn ids(roster: &Roster) -> Vec<&str> {
    roster.directory().view().iter().map(MemberId::as_str).collect()
}

#[test]
fn loading_two_members_fills_a_single_page() {
    let mut roster = Roster::default();
    roster.load(two_member_roster());

    assert_eq!(roster.total_pages(), 1);
    assert_eq!(roster.page_row_count(), 2);
    let names: Vec<_> = roster.page_rows().map(|member| member.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bo"]);
}

#[test]
fn searching_for_a_role_narrows_the_view() {
    let mut roster = Roster::default();
    roster.load(two_member_roster());

    roster.set_query("admin");
    assert_eq!(ids(&roster), vec!["1"]);
}

#[test]
fn filtering_is_idempotent() {
    let records = vec![
        MemberRecord::new("1", "Ann", "a@x.com", "admin"),
        MemberRecord::new("2", "Bo", "b@x.com", "member"),
        MemberRecord::new("3", "Abe", "abe@x.com", "member"),
    ];

    let once: Vec<MemberRecord> = records
        .iter()
        .filter(|record| filter::matches(record, "a"))
        .cloned()
        .collect();
    let twice: Vec<MemberRecord> = once
        .iter()
        .filter(|record| filter::matches(record, "a"))
        .cloned()
        .collect();

    assert_eq!(once, twice);
    assert_eq!(filter::filter(&records, "a"), filter::filter(&once, "a"));
}

#[test]
fn filtered_view_is_a_subset_of_the_full_set() {
    let mut roster = Roster::default();
    roster.load(two_member_roster());
    roster.set_query("x.com");

    for id in roster.directory().view() {
        assert!(roster.member(id).is_some());
    }
}

#[test]
fn deletion_survives_a_search_reset() {
    let mut roster = Roster::default();
    roster.load(two_member_roster());

    roster.remove(&"2".into()).expect("delete");
    assert_eq!(ids(&roster), vec!["1"]);

    // Clearing the search must not bring id "2" back.
    roster.set_query("");
    assert_eq!(ids(&roster), vec!["1"]);
    assert!(roster.member(&"2".into()).is_none());
}

#[test]
fn growing_the_page_size_resets_to_page_one() {
    let mut roster = Roster::default();
    roster.load(two_member_roster());
    roster.set_rows_per_page(1);
    roster.next_page();
    assert_eq!(roster.page(), 2);

    roster.set_rows_per_page(5);
    assert_eq!(roster.page(), 1);
    assert_eq!(roster.page_row_count(), 2);
}

#[test]
fn bulk_role_change_applies_to_every_checked_row() {
    let mut roster = Roster::default();
    roster.load(two_member_roster());
    roster.set_row_checked(0, true);
    roster.set_row_checked(1, true);

    let changed = roster.assign_role_to_selected("editor");
    assert_eq!(changed, 2);

    let member = roster.member(&"1".into()).unwrap();
    assert_eq!(member.role, "editor");
    assert_eq!(display_role(&member.role), "Editor");
    assert_eq!(roster.member(&"2".into()).unwrap().role, "editor");
    // The rewrite counts as a mutation, so the selection is gone.
    assert!(!roster.has_selection());
}

#[test]
fn blank_role_input_is_a_no_op() {
    let mut roster = Roster::default();
    roster.load(two_member_roster());
    roster.set_row_checked(0, true);

    assert_eq!(roster.assign_role_to_selected("   "), 0);
    assert_eq!(roster.member(&"1".into()).unwrap().role, "admin");
    // Nothing mutated, so the checkboxes stay put.
    assert!(roster.has_selection());
}

#[test]
fn bulk_delete_removes_checked_rows_in_one_pass() {
    let mut roster = Roster::default();
    roster.load(vec![
        MemberRecord::new("1", "Ann", "a@x.com", "admin"),
        MemberRecord::new("2", "Bo", "b@x.com", "member"),
        MemberRecord::new("3", "Cara", "c@x.com", "member"),
    ]);
    roster.set_row_checked(0, true);
    roster.set_row_checked(2, true);

    assert_eq!(roster.delete_selected(), 2);
    assert_eq!(ids(&roster), vec!["2"]);
    assert!(!roster.has_selection());
}

#[test]
fn shrinking_the_view_clamps_the_page() {
    let mut roster = Roster::default();
    let records: Vec<_> = (1..=11)
        .map(|n| MemberRecord::new(n.to_string(), format!("M{n}"), format!("m{n}@x.com"), "member"))
        .collect();
    roster.load(records);
    roster.set_rows_per_page(5);
    roster.last_page();
    assert_eq!(roster.page(), 3);

    // Delete the only record on page 3; the pager must fall back to page 2.
    roster.set_row_checked(0, true);
    assert_eq!(roster.delete_selected(), 1);
    assert_eq!(roster.page(), 2);
    assert_eq!(roster.total_pages(), 2);
}

#[test]
fn selection_does_not_survive_navigation_or_filtering() {
    let mut roster = Roster::default();
    let records: Vec<_> = (1..=8)
        .map(|n| MemberRecord::new(n.to_string(), format!("M{n}"), format!("m{n}@x.com"), "member"))
        .collect();
    roster.load(records);
    roster.set_rows_per_page(5);

    roster.set_row_checked(0, true);
    roster.next_page();
    assert!(!roster.has_selection());

    roster.set_row_checked(0, true);
    roster.set_query("M1");
    assert!(!roster.has_selection());

    roster.set_row_checked(0, true);
    roster.set_rows_per_page(10);
    assert!(!roster.has_selection());
}

#[test]
fn select_all_only_covers_the_current_page() {
    let mut roster = Roster::default();
    let records: Vec<_> = (1..=8)
        .map(|n| MemberRecord::new(n.to_string(), format!("M{n}"), format!("m{n}@x.com"), "member"))
        .collect();
    roster.load(records);
    roster.set_rows_per_page(5);

    roster.set_all_checked(true);
    assert!(roster.all_page_rows_checked());
    assert_eq!(roster.delete_selected(), 5);
    // The second page's rows were untouched.
    assert_eq!(roster.view_len(), 3);
}

#[test]
fn editing_a_stale_id_is_a_no_op_for_the_caller() {
    let mut roster = Roster::default();
    roster.load(two_member_roster());
    roster.remove(&"1".into()).expect("delete");

    let result = roster.apply_edit(&"1".into(), "X".into(), "x@x.com".into(), "member".into());
    assert!(result.is_err());
    assert_eq!(roster.view_len(), 1);
}

#[test]
fn saving_an_edit_keeps_the_id() {
    let mut roster = Roster::default();
    roster.load(two_member_roster());

    roster
        .apply_edit(&"1".into(), "Annette".into(), "annette@x.com".into(), "owner".into())
        .expect("edit");

    let member = roster.member(&"1".into()).unwrap();
    assert_eq!(member.id.as_str(), "1");
    assert_eq!(member.name, "Annette");
    assert_eq!(member.role, "owner");
}
