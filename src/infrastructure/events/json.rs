//! JSON Event Sink
//!
//! Outputs migrate events as NDJSON for scripting and CI consumption.

use crate::domain::ports::{MigrateEvent, MigrateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl MigrateEventSink for JsonEventSink {
    fn on_event(&self, event: MigrateEvent) {
        let json = match event {
            MigrateEvent::Started {
                source,
                picture_count,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "migrate",
                    "source": source.display().to_string(),
                    "picture_count": picture_count,
                })
            }

            MigrateEvent::PictureMigrated {
                index,
                total,
                original_url,
                new_url,
            } => {
                serde_json::json!({
                    "event": "picture_migrated",
                    "command": "migrate",
                    "index": index,
                    "total": total,
                    "original_url": original_url,
                    "new_url": new_url,
                })
            }

            MigrateEvent::PictureFailed {
                index,
                total,
                original_url,
                error,
            } => {
                serde_json::json!({
                    "event": "picture_failed",
                    "command": "migrate",
                    "index": index,
                    "total": total,
                    "original_url": original_url,
                    "error": error,
                })
            }

            MigrateEvent::Completed {
                output,
                migrated_count,
                failed_count,
            } => {
                let status = if failed_count == 0 {
                    "success"
                } else {
                    "partial"
                };
                serde_json::json!({
                    "event": "complete",
                    "command": "migrate",
                    "status": status,
                    "output": output.display().to_string(),
                    "migrated": migrated_count,
                    "failed": failed_count,
                })
            }
        };

        self.write_event(json);
    }
}
