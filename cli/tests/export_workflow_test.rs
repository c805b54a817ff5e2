//! CLI workflow tests using mock servers.
//!
//! These tests don't spawn the binary; they drive the same load → query →
//! export/copy path the commands use, against a wiremock Firestore listing.

#![cfg(all(test, not(target_arch = "wasm32")))]

use chrono::Utc;
use roster_business::{
    AdminTable, FirestoreStore, QueryState, SortDirection, SortField, SortSpec, StoreConfig,
    TableEvent,
};
use roster_clipboard::MemoryClipboard;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const USERS_PATH: &str = "/v1/projects/demo/databases/(default)/documents/users";

/// Test context for CLI workflow tests.
struct WorkflowTestContext {
    mock_server: MockServer,
    table: AdminTable,
}

impl WorkflowTestContext {
    async fn new() -> Self {
        Self {
            mock_server: MockServer::start().await,
            table: AdminTable::new(),
        }
    }

    fn store(&self) -> FirestoreStore {
        FirestoreStore::new(StoreConfig::new("demo").with_base_url(self.mock_server.uri()))
    }

    async fn load(&mut self) {
        let store = self.store();
        self.table.load(&store).await;
    }

    /// Mock the users listing with `count` generated documents.
    async fn mock_users(&self, count: usize) {
        let documents: Vec<serde_json::Value> = (1..=count)
            .map(|n| {
                serde_json::json!({
                    "name": format!("projects/demo/databases/(default)/documents/users/u{n}"),
                    "fields": {
                        "email": {"stringValue": format!("person{n:02}@example.com")},
                        "name": {"stringValue": format!("Person, \"{n}\"")},
                        "createdAt": {"timestampValue": format!("2024-03-{:02}T12:00:00Z", 28 - n)},
                        "emailVerified": {"booleanValue": n % 2 == 0},
                        "profileComplete": {"booleanValue": n % 3 == 0},
                    },
                })
            })
            .collect();

        Mock::given(method("GET"))
            .and(path(USERS_PATH))
            .and(query_param("orderBy", "createdAt desc"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "documents": documents })),
            )
            .mount(&self.mock_server)
            .await;
    }

    /// Mock the users listing with an error status.
    async fn mock_users_error(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path(USERS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "error": {"code": status, "message": "denied"}
            })))
            .mount(&self.mock_server)
            .await;
    }
}

#[tokio::test]
async fn test_list_pages_through_remote_users() {
    let mut ctx = WorkflowTestContext::new().await;
    ctx.mock_users(25).await;
    ctx.load().await;

    let view = ctx.table.render(&Utc::now());
    assert_eq!(view.summary.total, 25);
    assert_eq!(view.summary.verified, 12);
    assert_eq!(view.summary.profile_complete, 8);
    assert_eq!(view.pagination.label, "Page 1 of 2");
    assert_eq!(view.body.rows()[0].email, "person01@example.com");

    ctx.table.apply(TableEvent::GoToPage(9));
    let view = ctx.table.render(&Utc::now());
    assert_eq!(view.pagination.label, "Page 2 of 2");
    assert_eq!(view.body.rows().len(), 5);
}

#[tokio::test]
async fn test_export_writes_quoted_csv() {
    let mut ctx = WorkflowTestContext::new().await;
    ctx.mock_users(3).await;
    ctx.load().await;
    ctx.table.set_query(
        QueryState::new().with_sort(SortSpec::new(SortField::Email, SortDirection::Ascending)),
    );

    let export = ctx.table.export(&Utc::now()).expect("should export");
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = export.write_to_dir(dir.path()).expect("should write");

    let contents = std::fs::read_to_string(&path).expect("Should read");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines[0],
        "\"Email\",\"Name\",\"Join Date\",\"Verified\",\"Profile Complete\""
    );
    assert_eq!(
        lines[1],
        "\"person01@example.com\",\"Person, \"\"1\"\"\",\"Mar 27, 2024\",\"No\",\"No\""
    );
    assert_eq!(lines.len(), 4);
    assert!(
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("user-emails-") && name.ends_with(".csv"))
    );
}

#[tokio::test]
async fn test_copy_all_after_search() {
    let mut ctx = WorkflowTestContext::new().await;
    ctx.mock_users(12).await;
    ctx.load().await;
    ctx.table.apply(TableEvent::Search("PERSON1".to_owned()));

    let clipboard = MemoryClipboard::new();
    let notice = ctx.table.copy_all(&clipboard);
    assert!(!notice.is_error());
    assert_eq!(
        clipboard.contents().as_deref(),
        Some("person10@example.com, person11@example.com, person12@example.com")
    );
}

#[tokio::test]
async fn test_remote_error_is_shown_inline() {
    let mut ctx = WorkflowTestContext::new().await;
    ctx.mock_users_error(500).await;
    ctx.load().await;

    let view = ctx.table.render(&Utc::now());
    assert!(view.body.offers_retry());
    assert!(
        ctx.table
            .load_state()
            .error_message()
            .is_some_and(|message| message.contains("500"))
    );
    assert!(ctx.table.export(&Utc::now()).is_err());
}
