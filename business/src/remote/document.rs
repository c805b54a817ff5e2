//! Firestore REST document shapes and their decoding into [`UserRecord`]s.
//!
//! Values arrive wrapped by type (`{"stringValue": "..."}`). A field that is absent,
//! null, empty or of an unexpected type falls back to its default.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::record::{MISSING_EMAIL, MISSING_NAME, UserRecord};

pub const EMAIL_FIELD: &str = "email";
pub const NAME_FIELD: &str = "name";
pub const CREATED_AT_FIELD: &str = "createdAt";
pub const PROFILE_COMPLETE_FIELD: &str = "profileComplete";
pub const EMAIL_VERIFIED_FIELD: &str = "emailVerified";
pub const LAST_ACTIVE_FIELD: &str = "lastActive";

/// One document as returned by the REST listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Full resource name, `projects/.../documents/users/<id>`.
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, Value>,
}

/// A page of the `documents.list` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl ListDocumentsResponse {
    /// The continuation token, if another page follows.
    pub fn next_page_token(&self) -> Option<&str> {
        self.next_page_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

impl Document {
    /// Last path segment of the resource name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    fn value(&self, field: &str, kind: &str) -> Option<&Value> {
        self.fields.get(field)?.get(kind)
    }

    pub fn string(&self, field: &str) -> Option<&str> {
        self.value(field, "stringValue")?
            .as_str()
            .filter(|s| !s.is_empty())
    }

    pub fn boolean(&self, field: &str) -> Option<bool> {
        self.value(field, "booleanValue")?.as_bool()
    }

    /// `timestampValue` (RFC 3339), or an RFC 3339 `stringValue`.
    pub fn timestamp(&self, field: &str) -> Option<DateTime<Utc>> {
        let raw = self
            .value(field, "timestampValue")
            .and_then(Value::as_str)
            .or_else(|| self.string(field))?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|at| at.with_timezone(&Utc))
    }

    /// Decodes with defaults; `now` stands in for a missing creation time.
    pub fn to_record(&self, now: DateTime<Utc>) -> UserRecord {
        let created_at = self.timestamp(CREATED_AT_FIELD);
        let last_active = self
            .timestamp(LAST_ACTIVE_FIELD)
            .or(created_at)
            .unwrap_or(now);

        UserRecord::new(
            self.id(),
            self.string(EMAIL_FIELD).unwrap_or(MISSING_EMAIL),
            self.string(NAME_FIELD).unwrap_or(MISSING_NAME),
            created_at.unwrap_or(now),
        )
        .with_email_verified(self.boolean(EMAIL_VERIFIED_FIELD).unwrap_or(false))
        .with_profile_complete(self.boolean(PROFILE_COMPLETE_FIELD).unwrap_or(false))
        .with_last_active(last_active)
    }
}

/// Decodes a batch of documents, keeping their order.
pub fn decode_documents(documents: &[Document], now: DateTime<Utc>) -> Vec<UserRecord> {
    documents.iter().map(|doc| doc.to_record(now)).collect()
}
