//! `roster`: browse, search and export the registered users of a Firestore project.

mod cli;
mod commands;
mod config;
mod context;
mod output;
mod render;
mod timing;

use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory as _, Parser as _};
use roster_clipboard::SystemClipboard;

use crate::cli::{Cli, Commands, ConfigAction};
use crate::commands::{
    generate_completions, run_browse, run_config, run_copy, run_export, run_list, run_stats,
};
use crate::context::store_from_cli;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing with timing support
    timing::init_tracing(cli.verbose, cli.timing);

    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { action } => {
            run_config(
                action.unwrap_or(ConfigAction::Show),
                cli.config.as_deref(),
                &cli.store,
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::List { query, page } => run_list(store_from_cli(&cli)?.as_ref(), query, *page).await,
        Commands::Export { query, output, dir } => {
            run_export(
                store_from_cli(&cli)?.as_ref(),
                query,
                output.as_deref(),
                dir.as_deref(),
            )
            .await
        }
        Commands::Copy { query } => {
            run_copy(store_from_cli(&cli)?.as_ref(), query, &SystemClipboard).await
        }
        Commands::Stats => run_stats(store_from_cli(&cli)?.as_ref()).await,
        Commands::Browse => run_browse(store_from_cli(&cli)?.as_ref(), &SystemClipboard).await,
    }
}
