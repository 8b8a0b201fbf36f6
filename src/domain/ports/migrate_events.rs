//! Migrate Event Port
//!
//! Provides an observable interface for picture migrations.
//! Enables progress reporting and JSON event streams.

use std::path::PathBuf;

/// Event emitted while migrating a document
#[derive(Debug, Clone, PartialEq)]
pub enum MigrateEvent {
    /// Migration of a document started
    Started {
        source: PathBuf,
        picture_count: usize,
    },

    /// Picture re-hosted and substituted in the text
    PictureMigrated {
        index: usize,
        total: usize,
        original_url: String,
        new_url: String,
    },

    /// Picture could not be moved; its URL was left untouched
    PictureFailed {
        index: usize,
        total: usize,
        original_url: String,
        error: String,
    },

    /// Document written
    Completed {
        output: PathBuf,
        migrated_count: usize,
        failed_count: usize,
    },
}

/// Trait for receiving migrate events
///
/// Implementations can be:
/// - ConsoleEventSink: progress lines in the terminal
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait MigrateEventSink {
    /// Handle a migrate event
    fn on_event(&self, event: MigrateEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl MigrateEventSink for NoopEventSink {
    fn on_event(&self, _event: MigrateEvent) {}
}
