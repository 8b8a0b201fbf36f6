//! Migrate options

use std::path::PathBuf;

/// Default folder for downloaded pictures
pub const DEFAULT_CACHE_DIR: &str = "cache";
/// Default folder for migrated documents
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Options for a migration run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateOptions {
    /// Where downloaded pictures are cached
    pub cache_dir: PathBuf,
    /// Where the rewritten document is written (must exist)
    pub output_dir: PathBuf,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl MigrateOptions {
    /// Create new migrate options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set cache directory
    pub fn with_cache_dir(mut self, cache_dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = cache_dir.into();
        self
    }

    /// Set output directory
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}
