//! Command handlers

pub mod download;
pub mod locate;
pub mod migrate;
pub mod upload;

use std::path::Path;

use anyhow::{Context, Result};

use picbed::config::{Config, ConfigWarning};
use picbed::domain::ports::PictureStore;
use picbed::infrastructure::{build_client, build_store};

/// Resolve configuration for this run and report unknown keys on stderr
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let loaded = Config::resolve(explicit, &cwd)?;
    if let Some(path) = &loaded.path {
        tracing::debug!(config = %path.display(), "loaded configuration");
        print_config_warnings(path, &loaded.warnings);
    }
    Ok(loaded.config)
}

/// Picture store described by `config`
pub fn store_for(config: &Config) -> Result<Box<dyn PictureStore>> {
    let client = build_client(&config.http)?;
    Ok(build_store(&config.store, client)?)
}

fn print_config_warnings(path: &Path, warnings: &[ConfigWarning]) {
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!("⚠ Unknown config key '{}' in {}:{}", w.key, path.display(), line);
        } else {
            eprintln!("⚠ Unknown config key '{}' in {}", w.key, path.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?\n", suggestion);
        }
    }
}
