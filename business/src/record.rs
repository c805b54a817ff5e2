//! The user record as held by the record store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Shown when a document carries no email.
pub const MISSING_EMAIL: &str = "No email";

/// Shown when a document carries no display name.
pub const MISSING_NAME: &str = "Unknown";

/// One user's profile/status snapshot.
///
/// `last_active >= created_at` is expected but never checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Store-assigned identifier, unique within one load.
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub profile_complete: bool,
    pub email_verified: bool,
    pub last_active: DateTime<Utc>,
}

impl UserRecord {
    /// Creates an unverified, incomplete record last active at creation time.
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name: display_name.into(),
            created_at,
            profile_complete: false,
            email_verified: false,
            last_active: created_at,
        }
    }

    #[must_use]
    pub fn with_email_verified(mut self, verified: bool) -> Self {
        self.email_verified = verified;
        self
    }

    #[must_use]
    pub fn with_profile_complete(mut self, complete: bool) -> Self {
        self.profile_complete = complete;
        self
    }

    #[must_use]
    pub fn with_last_active(mut self, last_active: DateTime<Utc>) -> Self {
        self.last_active = last_active;
        self
    }

    /// Case-insensitive substring match against email or display name.
    ///
    /// `term` must already be lowercased and trimmed.
    pub fn matches(&self, term: &str) -> bool {
        term.is_empty()
            || self.email.to_lowercase().contains(term)
            || self.display_name.to_lowercase().contains(term)
    }
}
