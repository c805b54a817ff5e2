//! Store selection and table loading shared by all view commands.

use anyhow::Result;
use chrono::Local;
use roster_business::{AdminTable, DocumentStore, FirestoreStore, JsonFileStore};
use tracing::{info, instrument};

use crate::cli::{Cli, StoreArgs};
use crate::config::Config;
use crate::output::Output;
use crate::render;

/// Picks the document source: a saved listing when `--from-file` is given,
/// the remote store otherwise.
pub fn build_store(config: &Config, args: &StoreArgs) -> Box<dyn DocumentStore> {
    if let Some(path) = &args.from_file {
        info!(path = %path.display(), "reading users from file");
        return Box::new(JsonFileStore::new(path.clone()));
    }

    let store = config.resolve(args);
    info!(url = %store.documents_url(), "listing users from remote store");
    Box::new(FirestoreStore::new(store))
}

/// Config file plus overrides from `cli`.
pub fn store_from_cli(cli: &Cli) -> Result<Box<dyn DocumentStore>> {
    let config = Config::load(cli.config.as_deref())?;
    Ok(build_store(&config, &cli.store))
}

/// Loads a fresh table; a failed load is kept in the table, not returned.
///
/// The loading placeholder stays on screen while the fetch is pending.
#[instrument(skip_all, name = "load_users")]
pub async fn load_table(store: &dyn DocumentStore, out: &Output) -> AdminTable {
    let mut table = AdminTable::new();
    table
        .load_with(store, |pending| {
            out.status(render::table_text(&pending.render(&Local::now())));
        })
        .await;
    out.clear_status();
    table
}
