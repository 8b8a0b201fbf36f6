//! Migrate command handler
//!
//! Moves the pictures of one document, or of every matching document in a
//! folder, to the picture bed.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use picbed::application::{MigrateResult, MigrateUseCase, PictureTransfer};
use picbed::domain::ports::{DocumentRepository, MigrateEventSink};
use picbed::infrastructure::{
    build_client, build_store, ConsoleEventSink, FsDocumentRepository, HttpPictureSource,
    JsonEventSink,
};

use super::load_config;

/// Execute the migrate command
pub fn cmd_migrate(
    path: &Path,
    cache_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    ext: Option<String>,
    config_file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let mut config = load_config(config_file)?;

    // CLI flags win over file and environment
    if let Some(dir) = cache_dir {
        config.migrate.cache_dir = dir;
    }
    if let Some(dir) = output_dir {
        config.migrate.output_dir = dir;
    }
    if let Some(ext) = ext {
        config.migrate.extension = ext;
    }

    let options = config.migrate_options();
    std::fs::create_dir_all(&options.cache_dir).with_context(|| {
        format!(
            "cannot create cache directory {}",
            options.cache_dir.display()
        )
    })?;

    let documents = FsDocumentRepository::new();
    let targets = if path.is_dir() {
        documents.list(path, &config.migrate.extension)?
    } else {
        vec![path.to_path_buf()]
    };

    let client = build_client(&config.http)?;
    let store = build_store(&config.store, client.clone())?;
    let transfer = PictureTransfer::new(HttpPictureSource::new(client), store);

    let events: Arc<dyn MigrateEventSink> = if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout())
    };

    let mut use_case = MigrateUseCase::new(documents, transfer, options).with_events(events);

    let mut results: Vec<MigrateResult> = Vec::with_capacity(targets.len());
    for target in &targets {
        let result = use_case
            .execute(target)
            .with_context(|| format!("failed to migrate {}", target.display()))?;
        use_case.clear();
        results.push(result);
    }

    if json {
        let summary = serde_json::json!({
            "event": "summary",
            "command": "migrate",
            "documents": results,
        });
        println!("{}", summary);
    } else {
        print_failure_count(&results);
        if targets.is_empty() {
            println!(
                "No .{} documents found in {}",
                config.migrate.extension.trim_start_matches('.'),
                path.display()
            );
        }
    }

    Ok(())
}

fn print_failure_count(results: &[MigrateResult]) {
    let failed: usize = results.iter().map(|r| r.failed_count()).sum();
    if failed == 0 {
        return;
    }

    let total: usize = results.iter().map(|r| r.outcomes.len()).sum();
    eprintln!(
        "\n{} of {} picture(s) kept their original URL (see FAILED lines above)",
        failed, total
    );
}
