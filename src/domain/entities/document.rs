//! Document entity - a markdown file being migrated
//!
//! A document is loaded once, mutated in place as each picture URL is
//! replaced, and written once under the output directory.

use std::path::{Path, PathBuf};

/// A markdown document held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path the document was read from
    source_path: PathBuf,
    /// Current text
    content: String,
}

impl Document {
    /// Create a new Document
    pub fn new(source_path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            source_path: source_path.into(),
            content: content.into(),
        }
    }

    /// Get the source path
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Get the content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Take the content, consuming the document
    pub fn into_content(self) -> String {
        self.content
    }

    /// Replace the whole content
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Basename of the source path
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.source_path.file_name()
    }

    /// Where the migrated document goes: same basename, under `output_dir`
    pub fn output_path(&self, output_dir: &Path) -> Option<PathBuf> {
        self.file_name().map(|name| output_dir.join(name))
    }

    /// Replace every literal occurrence of `from` with `to`.
    ///
    /// Returns how many occurrences were replaced. An empty `from` replaces
    /// nothing.
    pub fn replace_all(&mut self, from: &str, to: &str) -> usize {
        if from.is_empty() {
            return 0;
        }
        let count = self.content.matches(from).count();
        if count > 0 {
            self.content = self.content.replace(from, to);
        }
        count
    }
}
