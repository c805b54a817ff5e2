//! Record store and its load lifecycle.
//!
//! The store is replaced wholesale on every load; there is no incremental merge.

use chrono::{DateTime, Utc};

use crate::error::RosterError;
use crate::record::UserRecord;

/// Full fetched collection, immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<UserRecord>,
    loaded_at: DateTime<Utc>,
}

impl RecordStore {
    pub fn new(records: Vec<UserRecord>, loaded_at: DateTime<Utc>) -> Self {
        Self { records, loaded_at }
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// A load is in flight.
    Loading,

    Loaded(RecordStore),

    /// The last load failed with this message.
    Failed(String),
}

impl LoadState {
    /// Settles a finished fetch into `Loaded` or `Failed`.
    pub fn from_fetch(result: Result<Vec<UserRecord>, RosterError>, now: DateTime<Utc>) -> Self {
        match result {
            Ok(records) => Self::Loaded(RecordStore::new(records, now)),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn store(&self) -> Option<&RecordStore> {
        match self {
            Self::Loaded(store) => Some(store),
            _ => None,
        }
    }

    /// Records of the current store, empty unless loaded.
    pub fn records(&self) -> &[UserRecord] {
        self.store().map(RecordStore::records).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 2, 2, 2, 2, 2)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_successful_fetch_becomes_loaded_store() {
        let state = LoadState::from_fetch(Ok(vec![UserRecord::new("u1", "a@x.com", "A", at())]), at());
        let store = state.store().expect("loaded");
        assert_eq!(store.records()[0].email, "a@x.com");
        assert_eq!(store.loaded_at(), at());
        assert_eq!(state.records().len(), 1);
    }

    #[test]
    fn test_failed_fetch_keeps_message_and_no_records() {
        let state = LoadState::from_fetch(Err(RosterError::Load("status 503".to_owned())), at());
        assert_eq!(
            state.error_message(),
            Some("failed to load user data: status 503")
        );
        assert!(state.records().is_empty());
    }
}
