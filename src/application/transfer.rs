//! Picture transfer
//!
//! Moves one picture from its original host to the picture bed: fetch to a
//! local cache file, then upload that file.

use std::path::Path;

use tracing::debug;

use crate::domain::ports::{PictureSource, PictureStore, StoreResult};

/// Fetch-then-upload over a picture source and a picture store
pub struct PictureTransfer<S, P>
where
    S: PictureSource,
    P: PictureStore,
{
    source: S,
    store: P,
}

impl<S, P> PictureTransfer<S, P>
where
    S: PictureSource,
    P: PictureStore,
{
    pub fn new(source: S, store: P) -> Self {
        Self { source, store }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    /// Download `original_url` to `cache_path`, upload it, return the new URL.
    ///
    /// Errors from either step are returned unchanged; nothing is retried.
    pub fn transfer(&self, original_url: &str, cache_path: &Path) -> StoreResult<String> {
        debug!(url = original_url, cache = %cache_path.display(), "fetching picture");
        self.source.fetch(original_url, cache_path)?;

        debug!(cache = %cache_path.display(), backend = %self.store.backend(), "uploading picture");
        self.store.upload(cache_path)
    }
}
