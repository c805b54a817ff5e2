use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use serde::Deserialize;

use super::DocumentStore;
use super::document::{Document, ListDocumentsResponse, decode_documents};
use crate::error::RosterError;
use crate::record::UserRecord;

#[derive(Deserialize)]
#[serde(untagged)]
enum SavedListing {
    Documents(Vec<Document>),
    Listing(ListDocumentsResponse),
}

impl SavedListing {
    fn into_documents(self) -> Vec<Document> {
        match self {
            Self::Documents(documents) => documents,
            Self::Listing(listing) => listing.documents,
        }
    }
}

/// Reads users from a saved listing on disk.
///
/// Accepts either a `documents.list` response or a bare array of documents.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, RosterError> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            warn!("Failed to read {}: {e}", self.path.display());
            RosterError::Load(format!("{}: {e}", self.path.display()))
        })?;

        let saved: SavedListing = serde_json::from_slice(&raw).map_err(|e| {
            warn!("Failed to decode {}: {e}", self.path.display());
            RosterError::Load(format!("{}: {e}", self.path.display()))
        })?;

        let documents = saved.into_documents();
        debug!("read {} documents from {}", documents.len(), self.path.display());
        Ok(decode_documents(&documents, Utc::now()))
    }
}
