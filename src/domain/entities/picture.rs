//! Picture reference entity

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

/// Extension given to every cached download.
///
/// Fixed regardless of the picture's real format.
pub const CACHE_EXTENSION: &str = "png";

/// Timestamp layout of cache file names, second resolution
pub const CACHE_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// One `![alt](url)` occurrence in a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureRef {
    /// Position in the document's reference list, 0-based
    pub index: usize,
    /// URL exactly as written in the markup
    pub url: String,
}

impl PictureRef {
    pub fn new(index: usize, url: impl Into<String>) -> Self {
        Self {
            index,
            url: url.into(),
        }
    }

    /// Cache file name for this reference, `<YYYYMMDDHHMMSS>_<index>.png`
    pub fn cache_file_name<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        format!(
            "{}_{}.{}",
            at.format(CACHE_TIMESTAMP_FORMAT),
            self.index,
            CACHE_EXTENSION
        )
    }

    /// Full cache path under `cache_dir`
    pub fn cache_path<Tz: TimeZone>(&self, cache_dir: &Path, at: &DateTime<Tz>) -> PathBuf
    where
        Tz::Offset: std::fmt::Display,
    {
        cache_dir.join(self.cache_file_name(at))
    }
}
