//! Search query matching over the roster.

use roster_model::{MemberId, MemberRecord};

/// Whether `record` matches `query`.
///
/// Matching is a case-insensitive substring test against name, email, or
/// role; a record matches when any field contains the query. An empty or
/// whitespace-only query matches every record.
pub fn matches(record: &MemberRecord, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    record.name.to_lowercase().contains(&query)
        || record.email.to_lowercase().contains(&query)
        || record.role.to_lowercase().contains(&query)
}

/// Derive the filtered view: ids of the records matching `query`, in the
/// records' original order. Pure function of its inputs.
pub fn filter(records: &[MemberRecord], query: &str) -> Vec<MemberId> {
    records
        .iter()
        .filter(|record| matches(record, query))
        .map(|record| record.id.clone())
        .collect()
}
