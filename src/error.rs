//! Error types for picbed
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::StoreError;

/// Result type alias for picbed operations
pub type PicbedResult<T> = Result<T, PicbedError>;

/// Main error type for picbed operations
#[derive(Error, Debug)]
pub enum PicbedError {
    /// Picture bed backend name is not one we implement
    #[error("unsupported picture bed backend '{backend}' (supported: aliyun-oss)")]
    UnsupportedBackend { backend: String },

    /// Configuration file missing or unreadable
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Migration requested before a document was loaded
    #[error("no document loaded - load a markdown file before migrating")]
    DocumentNotLoaded,

    /// Source document missing or unreadable
    #[error("failed to read document {path}: {source}")]
    DocumentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output document could not be written
    #[error("failed to write document {path}: {source}")]
    DocumentWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path has no file name component
    #[error("path '{path}' has no file name")]
    NoFileName { path: PathBuf },

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {message}")]
    HttpClient { message: String },

    /// Remote store or fetch failure surfaced directly (upload/download commands)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
