//! Picture store port - abstraction over the remote picture bed
//!
//! A picture store is an object-storage bucket that hosts the migrated
//! pictures. Implementations live in `infrastructure::store`.

use std::path::Path;

use thiserror::Error;

use crate::domain::value_objects::StoreBackend;

/// Result type for picture transfers
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised while moving a picture between hosts
#[derive(Error, Debug)]
pub enum StoreError {
    /// Original picture could not be fetched
    #[error("fetch of '{url}' failed: {message}")]
    Fetch { url: String, message: String },

    /// Server answered with a non-success status
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Upload to the picture bed failed
    #[error("upload of '{key}' failed: {message}")]
    Upload { key: String, message: String },

    /// Download from the picture bed failed
    #[error("download of '{key}' failed: {message}")]
    Download { key: String, message: String },

    /// Request signing failed
    #[error("could not sign request: {0}")]
    Signature(String),

    /// Local cache file I/O
    #[error("cache I/O error on {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Wrap an I/O error with the local path it happened on
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Remote picture bed
///
/// Implementations:
/// - `AliyunOssStore` - Aliyun Object Storage Service bucket
pub trait PictureStore {
    /// Which backend this store talks to
    fn backend(&self) -> StoreBackend;

    /// Upload a local file and return its public URL
    ///
    /// The remote key is `prefix + basename(local_path)`; an existing object
    /// with the same key is overwritten.
    fn upload(&self, local_path: &Path) -> StoreResult<String>;

    /// Download an object by key into a local file
    fn download(&self, remote_key: &str, local_path: &Path) -> StoreResult<()>;

    /// Public URL of a remote key
    fn public_url(&self, remote_key: &str) -> String;
}

impl<S: PictureStore + ?Sized> PictureStore for Box<S> {
    fn backend(&self) -> StoreBackend {
        (**self).backend()
    }

    fn upload(&self, local_path: &Path) -> StoreResult<String> {
        (**self).upload(local_path)
    }

    fn download(&self, remote_key: &str, local_path: &Path) -> StoreResult<()> {
        (**self).download(remote_key, local_path)
    }

    fn public_url(&self, remote_key: &str) -> String {
        (**self).public_url(remote_key)
    }
}
