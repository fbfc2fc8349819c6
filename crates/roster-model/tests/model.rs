//! Tests for roster-model payload decoding.

use roster_model::{MemberId, MemberRecord};

#[test]
fn decodes_roster_payload() {
    let payload = r#"[
        {"id": "1", "name": "Aaron Miles", "email": "aaron@mailinator.com", "role": "member"},
        {"id": "2", "name": "Aishwarya Naik", "email": "aishwarya@mailinator.com", "role": "admin"}
    ]"#;

    let records: Vec<MemberRecord> = serde_json::from_str(payload).expect("decode roster");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id, MemberId::new("1"));
    assert_eq!(records[0].name, "Aaron Miles");
    assert_eq!(records[1].role, "admin");
    assert_eq!(records[1].display_role(), "Admin");
}

#[test]
fn ignores_unknown_payload_fields() {
    let payload = r#"[
        {"id": "7", "name": "Bo", "email": "b@x.com", "role": "member", "team": "core"}
    ]"#;

    let records: Vec<MemberRecord> = serde_json::from_str(payload).expect("decode roster");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id.as_str(), "7");
}

#[test]
fn decodes_empty_roster() {
    let records: Vec<MemberRecord> = serde_json::from_str("[]").expect("decode roster");
    assert!(records.is_empty());
}
