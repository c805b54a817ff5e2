//! Copy-all of the current view's emails.

use std::process::ExitCode;

use anyhow::Result;
use roster_business::{DocumentStore, RosterError};
use roster_clipboard::ClipboardProvider;
use tracing::instrument;

use super::ensure_loaded;
use crate::cli::QueryArgs;
use crate::context::load_table;
use crate::output::Output;

#[instrument(skip_all, name = "copy")]
pub async fn run_copy(
    store: &dyn DocumentStore,
    query: &QueryArgs,
    clipboard: &dyn ClipboardProvider,
) -> Result<ExitCode> {
    let out = Output::new();
    let mut table = load_table(store, &out).await;
    if let Err(code) = ensure_loaded(&table, &out) {
        return Ok(code);
    }
    table.set_query(query.to_query());

    let notice = table.copy_all(clipboard);
    out.notice(&notice);
    if !notice.is_error() {
        out.muted(format!("{} email(s)", table.view_records().len()));
    }

    // Nothing to copy is not a failure.
    let failed = notice.is_error() && notice != RosterError::EmptyCopy.notice();
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
