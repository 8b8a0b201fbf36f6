//! File System Document Repository
//!
//! Reads and writes markdown documents on local disk.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::entities::Document;
use crate::domain::ports::DocumentRepository;
use crate::error::{PicbedError, PicbedResult};

/// Document repository backed by the local file system
///
/// Writes go through a temp file in the target directory, renamed into
/// place. The target directory is never created.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDocumentRepository;

impl FsDocumentRepository {
    /// Create a new repository
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRepository for FsDocumentRepository {
    fn load(&self, path: &Path) -> PicbedResult<Document> {
        let content = std::fs::read_to_string(path).map_err(|source| PicbedError::DocumentRead {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Document::new(path, content))
    }

    fn save(&self, path: &Path, content: &str) -> PicbedResult<()> {
        let write_err = |source| PicbedError::DocumentWrite {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.flush().map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    fn list(&self, dir: &Path, extension: &str) -> PicbedResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Err(PicbedError::DirectoryNotFound {
                path: dir.to_path_buf(),
            });
        }

        let wanted = extension.trim_start_matches('.');
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && path.extension().map(|e| e == wanted).unwrap_or(false) {
                files.push(path);
            }
        }

        // Sort by name for deterministic output
        files.sort();
        Ok(files)
    }
}
