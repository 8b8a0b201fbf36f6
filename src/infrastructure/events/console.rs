//! Console Event Sink
//!
//! Human-readable progress lines for interactive runs.

use crate::domain::ports::{MigrateEvent, MigrateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints one progress line per picture
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }
}

impl MigrateEventSink for ConsoleEventSink {
    fn on_event(&self, event: MigrateEvent) {
        let text = match event {
            MigrateEvent::Started {
                source,
                picture_count,
            } => format!(
                "Migrating {} ({} picture{})",
                source.display(),
                picture_count,
                if picture_count == 1 { "" } else { "s" }
            ),
            MigrateEvent::PictureMigrated {
                index,
                total,
                original_url,
                new_url,
            } => format!("  [{}/{}] {} -> {}", index + 1, total, original_url, new_url),
            MigrateEvent::PictureFailed {
                index,
                total,
                original_url,
                error,
            } => format!(
                "  [{}/{}] FAILED {} ({})",
                index + 1,
                total,
                original_url,
                error
            ),
            MigrateEvent::Completed {
                output,
                migrated_count,
                failed_count,
            } => {
                if failed_count == 0 {
                    format!("Wrote {} ({} migrated)", output.display(), migrated_count)
                } else {
                    format!(
                        "Wrote {} ({} migrated, {} failed)",
                        output.display(),
                        migrated_count,
                        failed_count
                    )
                }
            }
        };

        self.line(text);
    }
}
