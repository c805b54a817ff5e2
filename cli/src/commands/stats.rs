//! Summary counters over the whole collection.

use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use roster_business::DocumentStore;
use tracing::instrument;

use super::ensure_loaded;
use crate::context::load_table;
use crate::output::Output;

#[instrument(skip_all, name = "stats")]
pub async fn run_stats(store: &dyn DocumentStore) -> Result<ExitCode> {
    let out = Output::new();
    let table = load_table(store, &out).await;
    if let Err(code) = ensure_loaded(&table, &out) {
        return Ok(code);
    }

    let summary = table.render(&Local::now()).summary;
    out.heading("Users");
    out.field("Total", summary.total);
    out.field("Verified", summary.verified);
    out.field("Profile complete", summary.profile_complete);
    out.field("Active today", summary.active_today);
    if let Some(store) = table.load_state().store() {
        out.muted(format!(
            "Loaded {}",
            store.loaded_at().with_timezone(&Local).format("%Y-%m-%d %H:%M:%S")
        ));
    }
    Ok(ExitCode::SUCCESS)
}
