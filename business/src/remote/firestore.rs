use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};

use super::DocumentStore;
use super::document::{CREATED_AT_FIELD, ListDocumentsResponse, decode_documents};
use crate::config::StoreConfig;
use crate::error::RosterError;
use crate::http::Client;
use crate::record::UserRecord;

/// Upper bound on listing round trips, in case a server keeps handing out tokens.
const MAX_PAGES: usize = 1_000;

/// Lists the user collection over the Firestore REST API.
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    config: StoreConfig,
}

impl FirestoreStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    async fn fetch_page(&self, token: Option<&str>) -> Result<ListDocumentsResponse, RosterError> {
        let url = self.config.documents_url();
        let mut request = Client::get(&url)
            .header("accept", "application/json")
            .query("orderBy", format!("{CREATED_AT_FIELD} desc"))
            .query("pageSize", self.config.fetch_page_size.max(1).to_string());
        if let Some(token) = token {
            request = request.query("pageToken", token);
        }
        if let Some(key) = self.config.api_key() {
            request = request.query("key", key);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Users request to {url} failed: {e}");
            RosterError::Load(e.to_string())
        })?;

        if !response.is_success() {
            let body = response.text().unwrap_or_default();
            warn!("Users request returned {}: {body}", response.status);
            return Err(RosterError::Load(format!(
                "store responded with status {}",
                response.status
            )));
        }

        response.json().map_err(|e| {
            warn!("Failed to decode users listing: {e}");
            RosterError::Load(format!("invalid listing: {e}"))
        })
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, RosterError> {
        if self.config.project_id.trim().is_empty() {
            return Err(RosterError::Load("no project id configured".to_owned()));
        }

        let now = Utc::now();
        let mut records = Vec::new();
        let mut token: Option<String> = None;

        for page in 1..=MAX_PAGES {
            let listing = self.fetch_page(token.as_deref()).await?;
            debug!(
                "page {page}: {} documents from {}",
                listing.documents.len(),
                self.config.collection
            );
            records.extend(decode_documents(&listing.documents, now));

            match listing.next_page_token() {
                Some(next) => token = Some(next.to_owned()),
                None => {
                    info!("Loaded {} users in {page} page(s)", records.len());
                    return Ok(records);
                }
            }
        }

        warn!("Stopped listing users after {MAX_PAGES} pages");
        Ok(records)
    }
}
