use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com";
pub const DEFAULT_COLLECTION: &str = "users";
pub const DEFAULT_FETCH_PAGE_SIZE: u32 = 300;

/// Where the user documents live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Firestore REST root; point it at an emulator or a mock server in tests.
    pub base_url: String,
    pub project_id: String,
    pub collection: String,
    /// Optional browser API key, sent as the `key` query parameter.
    pub api_key: Option<String>,
    /// Documents requested per round trip.
    pub fetch_page_size: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            project_id: String::new(),
            collection: DEFAULT_COLLECTION.to_owned(),
            api_key: None,
            fetch_page_size: DEFAULT_FETCH_PAGE_SIZE,
        }
    }
}

impl StoreConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// `{base}/v1/projects/{project}/databases/(default)/documents/{collection}`
    pub fn documents_url(&self) -> String {
        format!(
            "{}/v1/projects/{}/databases/(default)/documents/{}",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.collection.trim_matches('/'),
        )
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}
