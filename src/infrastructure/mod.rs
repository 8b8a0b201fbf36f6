//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Markdown documents on disk
//! - `store/` - Picture bed backends (Aliyun OSS)
//! - `http` - Picture fetches from original hosts
//! - `events/` - Console and NDJSON progress sinks
//! - `logging` - tracing subscriber setup

pub mod events;
pub mod http;
pub mod logging;
pub mod repositories;
pub mod store;

// Re-export for convenience
pub use events::{ConsoleEventSink, JsonEventSink};
pub use http::{build_client, HttpPictureSource};
pub use logging::init_logging;
pub use repositories::FsDocumentRepository;
pub use store::{build_store, AliyunOssStore};
