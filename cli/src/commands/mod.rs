//! Command implementations for the roster CLI.
//!
//! Each subcommand is implemented in its own module.

use std::process::ExitCode;

use roster_business::{AdminTable, Notice};

use crate::output::Output;

pub mod browse;
pub mod completions;
pub mod config;
pub mod copy;
pub mod export;
pub mod list;
pub mod stats;

pub use browse::run_browse;
pub use completions::generate_completions;
pub use config::run_config;
pub use copy::run_copy;
pub use export::run_export;
pub use list::run_list;
pub use stats::run_stats;

/// Prints the inline load error when the table failed to load.
///
/// Non-interactive commands stop here with a failing exit code.
pub(crate) fn ensure_loaded(table: &AdminTable, out: &Output) -> Result<(), ExitCode> {
    match table.load_state().error_message() {
        Some(detail) => {
            let view = table.render(&chrono::Local::now());
            out.notice(&Notice::error(crate::render::table_text(&view)));
            tracing::debug!("load failure: {detail}");
            Err(ExitCode::FAILURE)
        }
        None => Ok(()),
    }
}
