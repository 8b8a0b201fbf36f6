//! Download command handler

use std::path::Path;

use anyhow::{Context, Result};

use picbed::domain::ports::PictureStore;

use super::{load_config, store_for};

/// Download an object by key into `dest`
pub fn cmd_download(key: &str, dest: &Path, config_file: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_file)?;
    let store = store_for(&config)?;

    store
        .download(key, dest)
        .with_context(|| format!("failed to download {}", store.public_url(key)))?;

    if json {
        let output = serde_json::json!({
            "event": "downloaded",
            "command": "download",
            "key": key,
            "dest": dest.display().to_string(),
        });
        println!("{}", output);
    } else {
        println!("Downloaded {} -> {}", key, dest.display());
    }
    Ok(())
}
