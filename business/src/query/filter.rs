//! Search filter stage.

use crate::record::UserRecord;

/// Lowercases and trims raw search input.
pub fn normalize_term(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Keeps records whose email or display name contains `term`, in store order.
///
/// An empty (or whitespace-only) term keeps the whole collection.
pub fn filter_records<'a>(records: &'a [UserRecord], term: &str) -> Vec<&'a UserRecord> {
    let term = normalize_term(term);
    records.iter().filter(|record| record.matches(&term)).collect()
}
