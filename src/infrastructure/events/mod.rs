//! Event Sink Implementations
//!
//! Concrete implementations of MigrateEventSink:
//! - ConsoleEventSink: human-readable progress
//! - JsonEventSink: NDJSON output for scripts and CI

mod console;
mod json;

pub use console::ConsoleEventSink;
pub use json::JsonEventSink;
