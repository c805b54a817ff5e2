//! Configuration file handling for the CLI.
//!
//! Store settings live in `$XDG_CONFIG_HOME/roster/config.toml` (or the platform
//! equivalent). Command-line flags and `ROSTER_*` environment variables override
//! whatever the file says.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use roster_business::StoreConfig;
use serde::{Deserialize, Serialize};

use crate::cli::StoreArgs;

/// CLI configuration stored on disk
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    /// Default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let project_dirs = ProjectDirs::from("dev", "roster", "roster")
            .context("Failed to determine config directory")?;
        Ok(project_dirs.config_dir().join("config.toml"))
    }

    /// `explicit` if given, the default location otherwise.
    pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
        match explicit {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Loads configuration.
    ///
    /// A missing file at the default location yields the defaults; an explicitly
    /// requested file must exist.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = Self::resolve_path(explicit)?;

        if explicit.is_none() && !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves configuration, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// File settings with flag/environment overrides applied.
    pub fn resolve(&self, args: &StoreArgs) -> StoreConfig {
        let mut store = self.store.clone();
        if let Some(base_url) = &args.base_url {
            store.base_url.clone_from(base_url);
        }
        if let Some(project_id) = &args.project_id {
            store.project_id.clone_from(project_id);
        }
        if let Some(collection) = &args.collection {
            store.collection.clone_from(collection);
        }
        if let Some(api_key) = &args.api_key {
            store.api_key = Some(api_key.clone());
        }
        store
    }
}

/// Store settings for display, with the API key masked.
pub fn masked(store: &StoreConfig) -> StoreConfig {
    let mut shown = store.clone();
    if let Some(key) = shown.api_key.as_mut() {
        let tail: String = key
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        *key = format!("****{tail}");
    }
    shown
}
