//! Domain logic for the roster user administration table.
//!
//! The flow is always store → filter → sort → paginate → view:
//! - [`remote`] fetches user documents into a [`store::RecordStore`]
//! - [`query`] derives the filtered, sorted and paged view
//! - [`view`] describes what a presenter should draw
//! - [`export`] and [`actions`] turn the current view into CSV or clipboard text
//!
//! [`table::AdminTable`] ties these together behind [`table::TableEvent`]s.

pub mod actions;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod http;
pub mod notice;
pub mod query;
pub mod record;
pub mod remote;
pub mod stats;
pub mod store;
pub mod table;
pub mod view;

pub use config::StoreConfig;
pub use error::RosterError;
pub use export::CsvExport;
pub use notice::{Notice, NoticeKind};
pub use query::{QueryState, SortDirection, SortField, SortSpec};
pub use record::UserRecord;
pub use remote::{DocumentStore, FirestoreStore, JsonFileStore, StaticStore};
pub use stats::Summary;
pub use store::{LoadState, RecordStore};
pub use table::{AdminTable, TableEvent};
pub use view::TableView;
