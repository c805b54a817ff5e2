use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use roster_business::{QueryState, SortDirection, SortField, SortSpec};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Browse, search and export registered users", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub store: StoreArgs,
}

/// Overrides for the `[store]` config section.
#[derive(Args, Debug, Default, Clone)]
pub struct StoreArgs {
    /// Firestore REST root (emulators, proxies)
    #[arg(long, global = true, env = "ROSTER_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Project holding the users collection
    #[arg(long = "project", global = true, env = "ROSTER_PROJECT_ID", value_name = "ID")]
    pub project_id: Option<String>,

    /// Collection to list
    #[arg(long, global = true, env = "ROSTER_COLLECTION", value_name = "NAME")]
    pub collection: Option<String>,

    /// API key sent with every request
    #[arg(long, global = true, env = "ROSTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Read users from a saved listing instead of the remote store
    #[arg(long, global = true, value_name = "PATH")]
    pub from_file: Option<PathBuf>,
}

/// Search and sort flags shared by the view commands.
#[derive(Args, Debug, Default, Clone)]
pub struct QueryArgs {
    /// Keep users whose email or name contains this text
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Sort by: email, name, created, verified, profile, active
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// Sort descending
    #[arg(long, conflicts_with = "asc")]
    pub desc: bool,

    /// Sort ascending
    #[arg(long)]
    pub asc: bool,
}

impl QueryArgs {
    /// Newest first unless told otherwise; an explicit field starts ascending.
    pub fn sort_spec(&self) -> SortSpec {
        let direction = if self.desc {
            SortDirection::Descending
        } else if self.asc || self.sort.is_some() {
            SortDirection::Ascending
        } else {
            SortDirection::default()
        };
        SortSpec::new(self.sort.unwrap_or_default(), direction)
    }

    pub fn to_query(&self) -> QueryState {
        QueryState::new()
            .with_search(self.search.as_deref().unwrap_or_default())
            .with_sort(self.sort_spec())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show one page of users
    List {
        #[command(flatten)]
        query: QueryArgs,

        /// Page to show (1-based)
        #[arg(long, short = 'p', default_value_t = 1)]
        page: usize,
    },
    /// Export the matching users as CSV
    Export {
        #[command(flatten)]
        query: QueryArgs,

        /// Write to this file
        #[arg(long, short = 'o', conflicts_with = "dir")]
        output: Option<PathBuf>,

        /// Write into this directory under a dated file name
        #[arg(long, short = 'd')]
        dir: Option<PathBuf>,
    },
    /// Copy the matching users' emails to the clipboard
    Copy {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Show summary counters
    Stats,
    /// Browse users interactively
    Browse,
    /// Show or create the config file
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the resolved store settings
    Show,
    /// Print the config file location
    Path,
    /// Write the resolved settings to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
