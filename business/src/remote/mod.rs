//! Sources of user documents.
//!
//! [`DocumentStore`] is the seam between the table and wherever users are kept:
//! - [`FirestoreStore`]: Firestore REST listing, following `nextPageToken`
//! - [`JsonFileStore`]: a saved listing (or bare document array) on disk
//!
//! Both decode through [`document`], so field defaults are applied in one place.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::RosterError;
use crate::record::UserRecord;

pub mod document;
mod file;
mod firestore;

pub use file::JsonFileStore;
pub use firestore::FirestoreStore;

/// Fetches the full user collection in one go.
#[async_trait]
pub trait DocumentStore: Send + Sync + Debug {
    /// Every user document, newest first when the source supports ordering.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, RosterError>;
}

/// Store that always answers with a fixed result.
#[derive(Debug, Clone)]
pub struct StaticStore {
    result: Result<Vec<UserRecord>, RosterError>,
}

impl StaticStore {
    pub fn new(records: Vec<UserRecord>) -> Self {
        Self {
            result: Ok(records),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(RosterError::Load(message.into())),
        }
    }
}

#[async_trait]
impl DocumentStore for StaticStore {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, RosterError> {
        self.result.clone()
    }
}
