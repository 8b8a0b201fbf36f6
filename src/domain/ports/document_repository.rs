//! Document repository port - loading and persisting markdown documents

use std::path::{Path, PathBuf};

use crate::domain::entities::Document;
use crate::error::PicbedResult;

/// Storage for markdown documents
///
/// Implementations:
/// - `FsDocumentRepository` - local disk
pub trait DocumentRepository {
    /// Read a UTF-8 document fully into memory
    fn load(&self, path: &Path) -> PicbedResult<Document>;

    /// Write UTF-8 text to `path`, creating or overwriting it.
    ///
    /// The parent directory must already exist.
    fn save(&self, path: &Path, content: &str) -> PicbedResult<()>;

    /// Files directly inside `dir` with the given extension, sorted by name
    fn list(&self, dir: &Path, extension: &str) -> PicbedResult<Vec<PathBuf>>;
}
