//! The admin table: load state plus query state, driven by events.
//!
//! Every event produces a fresh [`QueryState`]; rendering, export and copy always
//! re-derive the view from the full store.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};
use log::{debug, info, warn};
use roster_clipboard::ClipboardProvider;

use crate::actions;
use crate::error::RosterError;
use crate::export::{CsvExport, export_view};
use crate::notice::Notice;
use crate::query::{PAGE_SIZE, QueryState, SortField, derive_view, paginate, total_pages};
use crate::record::UserRecord;
use crate::remote::DocumentStore;
use crate::store::LoadState;
use crate::view::{TableView, build_view};

/// User interactions that change what the table shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Search box input; returns to the first page.
    Search(String),
    /// Header click: same field flips direction, a new field starts ascending.
    Sort(SortField),
    NextPage,
    PreviousPage,
    /// 1-based; out-of-range pages are clamped when rendered.
    GoToPage(usize),
}

#[derive(Debug, Clone, Default)]
pub struct AdminTable {
    load: LoadState,
    query: QueryState,
}

impl AdminTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table over an already loaded state, e.g. for tests.
    pub fn with_load(load: LoadState) -> Self {
        Self {
            load,
            query: QueryState::default(),
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    /// Replaces the whole query, e.g. from command-line flags.
    pub fn set_query(&mut self, query: QueryState) {
        self.query = query;
    }

    fn begin_load(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Replaces the store wholesale with the outcome of a fetch.
    ///
    /// A failure is kept in the load state; the returned notice is for callers
    /// that want to flag it beyond the inline error.
    fn finish_load(
        &mut self,
        result: Result<Vec<UserRecord>, RosterError>,
        now: DateTime<Utc>,
    ) -> Option<Notice> {
        let notice = match &result {
            Ok(records) => {
                info!("Loaded {} user records", records.len());
                None
            }
            Err(e) => {
                warn!("Failed to load users: {e}");
                Some(e.notice())
            }
        };
        self.load = LoadState::from_fetch(result, now);
        notice
    }

    /// Fetches from `store`, replacing the current records.
    pub async fn load(&mut self, store: &dyn DocumentStore) -> Option<Notice> {
        self.load_with(store, |_| ()).await
    }

    /// Like [`load`](Self::load), with a hook for drawing the placeholder.
    ///
    /// `pending` sees the table in the loading state, before the fetch is awaited.
    pub async fn load_with<F>(&mut self, store: &dyn DocumentStore, pending: F) -> Option<Notice>
    where
        F: FnOnce(&Self),
    {
        self.begin_load();
        pending(self);
        let result = store.fetch_users().await;
        self.finish_load(result, Utc::now())
    }

    /// Filtered and sorted records for the current query.
    pub fn view_records(&self) -> Vec<&UserRecord> {
        derive_view(self.load.records(), &self.query)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.view_records().len(), PAGE_SIZE)
    }

    pub fn apply(&mut self, event: TableEvent) {
        debug!("table event: {event:?}");
        let pages = self.total_pages();
        let query = std::mem::take(&mut self.query);
        self.query = match event {
            TableEvent::Search(raw) => query.with_search(&raw),
            TableEvent::Sort(field) => query.with_sort_toggled(field),
            TableEvent::NextPage => query.next_page(pages),
            TableEvent::PreviousPage => query.previous_page(pages),
            TableEvent::GoToPage(page) => query.with_page(page),
        };
    }

    pub fn render<Tz>(&self, now: &DateTime<Tz>) -> TableView
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        build_view(&self.load, &self.query, now)
    }

    /// CSV of the whole view (not just the visible page).
    pub fn export<Tz>(&self, now: &DateTime<Tz>) -> Result<CsvExport, RosterError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        export_view(&self.view_records(), now)
    }

    pub fn copy_all<C>(&self, clipboard: &C) -> Notice
    where
        C: ClipboardProvider + ?Sized,
    {
        actions::copy_all(&self.view_records(), clipboard)
    }

    /// Record shown at 1-based `number` on the current page.
    pub fn row(&self, number: usize) -> Result<&UserRecord, RosterError> {
        let view = self.view_records();
        let page = paginate(&view, self.query.page());
        number
            .checked_sub(1)
            .and_then(|index| page.items.get(index))
            .copied()
            .ok_or(RosterError::NoSuchRow(number))
    }

    /// Copies the email of the row at `number` on the current page.
    pub fn copy_row<C>(&self, number: usize, clipboard: &C) -> Notice
    where
        C: ClipboardProvider + ?Sized,
    {
        match self.row(number) {
            Ok(record) => actions::copy_email(record, clipboard),
            Err(e) => e.notice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortDirection;
    use crate::remote::StaticStore;
    use crate::view::TableBody;
    use async_trait::async_trait;
    use chrono::Duration;
    use roster_clipboard::MemoryClipboard;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn records(count: usize) -> Vec<UserRecord> {
        (0..count)
            .map(|i| {
                UserRecord::new(
                    format!("u{i}"),
                    format!("user{i:02}@x.com"),
                    format!("User {i:02}"),
                    now() - Duration::days(i64::try_from(i).unwrap_or_default()),
                )
            })
            .collect()
    }

    fn loaded(count: usize) -> AdminTable {
        AdminTable::with_load(LoadState::from_fetch(Ok(records(count)), now()))
    }

    #[test]
    fn test_new_table_renders_loading() {
        let table = AdminTable::new();
        assert_eq!(table.render(&now()).body, TableBody::Loading);
    }

    #[tokio::test]
    async fn test_load_failure_is_rendered_inline() {
        let mut table = AdminTable::new();
        let notice = table.load(&StaticStore::failing("permission denied")).await;

        let view = table.render(&now());
        assert!(view.body.offers_retry());
        assert!(table.load_state().error_message().is_some());
        assert_eq!(
            notice.map(|n| n.message),
            Some("Failed to load user data. Run with --verbose for details.".to_owned())
        );
    }

    /// Counts fetches so a test can tell whether one has happened yet.
    #[derive(Debug, Default)]
    struct CountingStore {
        fetches: AtomicUsize,
    }

    #[async_trait]
    impl DocumentStore for CountingStore {
        async fn fetch_users(&self) -> Result<Vec<UserRecord>, RosterError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(records(2))
        }
    }

    #[tokio::test]
    async fn test_placeholder_is_drawn_before_fetch() {
        let store = CountingStore::default();
        let mut table = loaded(5);
        let mut drawn = Vec::new();

        let notice = table
            .load_with(&store, |pending| {
                drawn.push((
                    pending.render(&now()).body,
                    store.fetches.load(Ordering::SeqCst),
                ));
            })
            .await;

        assert_eq!(notice, None);
        assert_eq!(drawn, [(TableBody::Loading, 0)]);
        assert_eq!(store.fetches.load(Ordering::SeqCst), 1);
        assert_eq!(table.view_records().len(), 2);
    }

    #[tokio::test]
    async fn test_reload_replaces_store() {
        let mut table = AdminTable::new();
        table.load(&StaticStore::new(records(3))).await;
        assert_eq!(table.view_records().len(), 3);

        table.load(&StaticStore::new(records(1))).await;
        assert_eq!(table.view_records().len(), 1);
    }

    #[test]
    fn test_next_page_stops_at_last() {
        let mut table = loaded(25);
        table.apply(TableEvent::NextPage);
        table.apply(TableEvent::NextPage);
        assert_eq!(table.query().page(), 2);

        table.apply(TableEvent::PreviousPage);
        table.apply(TableEvent::PreviousPage);
        assert_eq!(table.query().page(), 1);
    }

    #[test]
    fn test_search_resets_page() {
        let mut table = loaded(45);
        table.apply(TableEvent::GoToPage(3));
        assert_eq!(table.query().page(), 3);

        table.apply(TableEvent::Search("user1".to_owned()));
        assert_eq!(table.query().page(), 1);
        assert_eq!(table.view_records().len(), 10);
    }

    #[test]
    fn test_sort_event_toggles() {
        let mut table = loaded(3);
        table.apply(TableEvent::Sort(SortField::Email));
        assert_eq!(table.query().sort().direction, SortDirection::Ascending);
        assert_eq!(table.view_records()[0].email, "user00@x.com");

        table.apply(TableEvent::Sort(SortField::Email));
        assert_eq!(table.query().sort().direction, SortDirection::Descending);
        assert_eq!(table.view_records()[0].email, "user02@x.com");
    }

    #[test]
    fn test_copy_row_uses_current_page() {
        let mut table = loaded(25);
        table.apply(TableEvent::NextPage);
        let clipboard = MemoryClipboard::new();

        assert!(!table.copy_row(1, &clipboard).is_error());
        // Default order is newest first, so page 2 starts at the 21st newest.
        assert_eq!(clipboard.contents().as_deref(), Some("user20@x.com"));

        let notice = table.copy_row(6, &clipboard);
        assert!(notice.is_error());
        assert_eq!(notice.message, "row 6 is not on the current page");
    }

    #[test]
    fn test_export_covers_whole_view() {
        let table = loaded(25);
        let export = table.export(&now()).expect("should export");
        assert_eq!(export.rows, 25);
        assert_eq!(export.contents.lines().count(), 26);
    }
}
