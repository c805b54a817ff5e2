//! `roster config`: inspect or create the config file.

use std::path::Path;

use anyhow::{Context as _, Result, bail};
use roster_business::Notice;

use crate::cli::{ConfigAction, StoreArgs};
use crate::config::{Config, masked};
use crate::output::Output;

pub fn run_config(action: ConfigAction, explicit: Option<&Path>, args: &StoreArgs) -> Result<()> {
    let out = Output::new();
    let path = Config::resolve_path(explicit)?;

    match action {
        ConfigAction::Path => out.print(path.display()),
        ConfigAction::Show => {
            let config = Config::load(explicit)?;
            let shown = Config {
                store: masked(&config.resolve(args)),
            };
            out.muted(format!("# {}", path.display()));
            out.print(toml::to_string_pretty(&shown).context("Failed to serialize configuration")?);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    path.display()
                );
            }
            let base = if path.exists() {
                Config::load_from(&path)?
            } else {
                Config::default()
            };
            let config = Config {
                store: base.resolve(args),
            };
            config.save_to(&path)?;
            out.notice(&Notice::success(format!("Wrote {}", path.display())));
        }
    }
    Ok(())
}
