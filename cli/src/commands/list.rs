//! List one page of users.

use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use roster_business::{DocumentStore, Notice, TableEvent};
use tracing::instrument;

use super::ensure_loaded;
use crate::cli::QueryArgs;
use crate::context::load_table;
use crate::output::Output;
use crate::render;

#[instrument(skip_all, name = "list", fields(page))]
pub async fn run_list(store: &dyn DocumentStore, query: &QueryArgs, page: usize) -> Result<ExitCode> {
    let out = Output::new();
    let mut table = load_table(store, &out).await;
    if let Err(code) = ensure_loaded(&table, &out) {
        return Ok(code);
    }

    table.set_query(query.to_query());
    table.apply(TableEvent::GoToPage(page));

    let view = table.render(&Local::now());
    if view.pagination.page != page {
        out.notice(&Notice::info(format!(
            "Page {page} is out of range; showing {}",
            view.pagination.label
        )));
    }
    out.print(render::screen(&view));
    Ok(ExitCode::SUCCESS)
}
