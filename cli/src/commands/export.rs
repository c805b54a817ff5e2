//! CSV export of the current view.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use roster_business::export::{CsvExport, EXPORTED_MESSAGE};
use roster_business::{AdminTable, DocumentStore, Notice, RosterError};
use tracing::{instrument, warn};

use super::ensure_loaded;
use crate::cli::QueryArgs;
use crate::context::load_table;
use crate::output::Output;

/// Where the file goes: `output` as given, else `dir` (or the working directory)
/// joined with the dated file name.
pub fn target_path(export: &CsvExport, output: Option<&Path>, dir: Option<&Path>) -> PathBuf {
    match output {
        Some(path) => path.to_path_buf(),
        None => dir.unwrap_or_else(|| Path::new(".")).join(&export.filename),
    }
}

/// Writes the export of `table`; empty views and write failures become notices.
pub fn export_table(
    table: &AdminTable,
    output: Option<&Path>,
    dir: Option<&Path>,
) -> (Notice, Option<PathBuf>) {
    let export = match table.export(&Local::now()) {
        Ok(export) => export,
        Err(e) => return (e.notice(), None),
    };

    let path = target_path(&export, output, dir);
    match export.write_to_path(&path) {
        Ok(()) => (Notice::success(EXPORTED_MESSAGE), Some(path)),
        Err(e) => {
            warn!("CSV export to {} failed: {e}", path.display());
            (e.notice(), None)
        }
    }
}

#[instrument(skip_all, name = "export")]
pub async fn run_export(
    store: &dyn DocumentStore,
    query: &QueryArgs,
    output: Option<&Path>,
    dir: Option<&Path>,
) -> Result<ExitCode> {
    let out = Output::new();
    let mut table = load_table(store, &out).await;
    if let Err(code) = ensure_loaded(&table, &out) {
        return Ok(code);
    }
    table.set_query(query.to_query());

    let (notice, path) = export_table(&table, output, dir);
    out.notice(&notice);
    if let Some(path) = path {
        out.muted(format!("{} rows → {}", table.view_records().len(), path.display()));
    }

    // Nothing to export is not a failure.
    let failed = notice.is_error() && notice != RosterError::EmptyExport.notice();
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
