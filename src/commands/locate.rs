//! Locate command handler

use std::path::Path;

use anyhow::Result;

use picbed::domain::ports::DocumentRepository;
use picbed::domain::services::locate_pictures;
use picbed::infrastructure::FsDocumentRepository;

/// Print the picture URLs of a document in order
pub fn cmd_locate(path: &Path, json: bool) -> Result<()> {
    let document = FsDocumentRepository::new().load(path)?;
    let pictures = locate_pictures(document.content());

    if json {
        let output = serde_json::json!({
            "event": "located",
            "command": "locate",
            "source": path.display().to_string(),
            "pictures": pictures
                .iter()
                .map(|p| serde_json::json!({ "index": p.index, "url": p.url }))
                .collect::<Vec<_>>(),
        });
        println!("{}", output);
        return Ok(());
    }

    for picture in &pictures {
        println!("{}", picture.url);
    }
    Ok(())
}
