//! Picture source port - fetches a picture from its original URL

use std::path::Path;

use super::picture_store::StoreResult;

/// Where pictures are downloaded from before being re-hosted
///
/// Implementations:
/// - `HttpPictureSource` - plain HTTP(S) GET
pub trait PictureSource {
    /// Fetch `url` and write the body to `local_path`
    fn fetch(&self, url: &str, local_path: &Path) -> StoreResult<()>;
}

impl<S: PictureSource + ?Sized> PictureSource for Box<S> {
    fn fetch(&self, url: &str, local_path: &Path) -> StoreResult<()> {
        (**self).fetch(url, local_path)
    }
}
