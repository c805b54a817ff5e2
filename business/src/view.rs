//! View model for the admin table.
//!
//! [`build_view`] is a pure function of the load state, the query state and the
//! current time. It returns a complete description of what to draw (summary
//! counters, column headers with sort indicators, the body and the pagination
//! controls), so front ends only translate it to their surface.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::format::{format_join_date, sanitize_text};
use crate::query::{QueryState, SortDirection, SortField, derive_view, paginate};
use crate::record::UserRecord;
use crate::stats::Summary;
use crate::store::LoadState;

pub const LOADING_MESSAGE: &str = "Loading user data...";
pub const EMPTY_MESSAGE: &str = "No users found";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load user data.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Ascending,
    Descending,
    Unsorted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub label: &'static str,
    /// `None` for columns that cannot be sorted.
    pub field: Option<SortField>,
    pub indicator: SortIndicator,
}

/// One rendered table row; all text is already sanitized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// 1-based row number within the current page.
    pub number: usize,
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub joined: String,
    pub email_verified: bool,
    pub profile_complete: bool,
}

impl RowView {
    pub fn verified_badge(&self) -> &'static str {
        if self.email_verified { "Verified" } else { "Unverified" }
    }

    pub fn profile_badge(&self) -> &'static str {
        if self.profile_complete { "Complete" } else { "Incomplete" }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Loading,
    /// Load failed; the surface offers a retry.
    Failed {
        message: String,
        detail: String,
    },
    /// Loaded, but nothing matches.
    Empty,
    Rows(Vec<RowView>),
}

impl TableBody {
    /// Placeholder text for bodies without rows.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Loading => Some(LOADING_MESSAGE),
            Self::Failed { message, .. } => Some(message.as_str()),
            Self::Empty => Some(EMPTY_MESSAGE),
            Self::Rows(_) => None,
        }
    }

    pub fn rows(&self) -> &[RowView] {
        match self {
            Self::Rows(rows) => rows,
            _ => &[],
        }
    }

    pub fn offers_retry(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub page: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub label: String,
}

impl PaginationView {
    fn single_page() -> Self {
        Self {
            page: 1,
            total_pages: 1,
            previous_enabled: false,
            next_enabled: false,
            label: "Page 1 of 1".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub summary: Summary,
    pub columns: Vec<ColumnHeader>,
    pub body: TableBody,
    pub pagination: PaginationView,
    /// Size of the whole filtered view (all pages).
    pub matching: usize,
    pub search: String,
}

/// Sortable columns in display order.
const COLUMNS: [(&str, SortField); 4] = [
    ("Email", SortField::Email),
    ("Name", SortField::Name),
    ("Joined", SortField::Created),
    ("Status", SortField::Verified),
];

pub fn column_headers(query: &QueryState) -> Vec<ColumnHeader> {
    let sort = query.sort();
    COLUMNS
        .iter()
        .map(|&(label, field)| ColumnHeader {
            label,
            field: Some(field),
            indicator: match (sort.field == field, sort.direction) {
                (false, _) => SortIndicator::Unsorted,
                (true, SortDirection::Ascending) => SortIndicator::Ascending,
                (true, SortDirection::Descending) => SortIndicator::Descending,
            },
        })
        .collect()
}

pub fn row_view<Tz>(number: usize, record: &UserRecord, tz: &Tz) -> RowView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    RowView {
        number,
        id: record.id.clone(),
        email: sanitize_text(&record.email),
        display_name: sanitize_text(&record.display_name),
        joined: format_join_date(&record.created_at, tz),
        email_verified: record.email_verified,
        profile_complete: record.profile_complete,
    }
}

/// Runs the full pipeline from the store and describes the result.
pub fn build_view<Tz>(load: &LoadState, query: &QueryState, now: &DateTime<Tz>) -> TableView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let columns = column_headers(query);
    let search = query.search().to_owned();

    let store = match load {
        LoadState::Idle | LoadState::Loading => {
            return TableView {
                summary: Summary::default(),
                columns,
                body: TableBody::Loading,
                pagination: PaginationView::single_page(),
                matching: 0,
                search,
            };
        }
        LoadState::Failed(detail) => {
            return TableView {
                summary: Summary::default(),
                columns,
                body: TableBody::Failed {
                    message: LOAD_FAILED_MESSAGE.to_owned(),
                    detail: detail.clone(),
                },
                pagination: PaginationView::single_page(),
                matching: 0,
                search,
            };
        }
        LoadState::Loaded(store) => store,
    };

    let view = derive_view(store.records(), query);
    let page = paginate(&view, query.page());
    let tz = now.timezone();

    let body = if view.is_empty() {
        TableBody::Empty
    } else {
        TableBody::Rows(
            page.items
                .iter()
                .enumerate()
                .map(|(index, record)| row_view(index + 1, record, &tz))
                .collect(),
        )
    };

    TableView {
        summary: Summary::from_records(store.records(), now),
        columns,
        body,
        pagination: PaginationView {
            page: page.number,
            total_pages: page.total_pages,
            previous_enabled: page.has_previous(),
            next_enabled: page.has_next(),
            label: page.label(),
        },
        matching: view.len(),
        search,
    }
}
