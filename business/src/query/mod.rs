//! Client-side query pipeline: filter → sort → paginate.
//!
//! Each stage is a pure function. [`derive_view`] always starts from the full
//! collection handed to it, so re-running after any input change never compounds
//! a stale filter.

pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;

pub use filter::{filter_records, normalize_term};
pub use paginate::{PAGE_SIZE, PageSlice, clamp_page, paginate, paginate_by, total_pages};
pub use sort::{SortDirection, SortField, SortKey, SortSpec, sort_view};
pub use state::QueryState;

use crate::record::UserRecord;

/// The filtered and sorted view for `query`, borrowed from `records`.
pub fn derive_view<'a>(records: &'a [UserRecord], query: &QueryState) -> Vec<&'a UserRecord> {
    let mut view = filter_records(records, query.search());
    sort_view(&mut view, query.sort());
    view
}
