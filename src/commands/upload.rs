//! Upload command handler

use std::path::Path;

use anyhow::{Context, Result};

use picbed::domain::ports::PictureStore;

use super::{load_config, store_for};

/// Upload one local file and print its public URL
pub fn cmd_upload(file: &Path, config_file: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config(config_file)?;
    let store = store_for(&config)?;

    let url = store
        .upload(file)
        .with_context(|| format!("failed to upload {}", file.display()))?;

    if json {
        let output = serde_json::json!({
            "event": "uploaded",
            "command": "upload",
            "backend": store.backend().as_str(),
            "file": file.display().to_string(),
            "url": url,
        });
        println!("{}", output);
    } else {
        println!("{}", url);
    }
    Ok(())
}
