//! Migrate result types

use std::path::PathBuf;

use serde::Serialize;

/// What happened to one picture reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PictureStatus {
    /// Re-hosted. `replacements` counts the substitutions this picture made;
    /// a repeated URL already replaced by an earlier reference makes none.
    Migrated { new_url: String, replacements: usize },
    /// Left untouched
    Failed { error: String },
}

/// Outcome of a single picture reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PictureOutcome {
    /// Position in the document's reference list, 0-based
    pub index: usize,
    /// URL as written in the source document
    pub original_url: String,
    /// Local cache file the picture was downloaded to
    pub cache_path: PathBuf,
    #[serde(flatten)]
    pub status: PictureStatus,
}

impl PictureOutcome {
    pub fn migrated(
        index: usize,
        original_url: impl Into<String>,
        cache_path: PathBuf,
        new_url: impl Into<String>,
        replacements: usize,
    ) -> Self {
        Self {
            index,
            original_url: original_url.into(),
            cache_path,
            status: PictureStatus::Migrated {
                new_url: new_url.into(),
                replacements,
            },
        }
    }

    pub fn failed(
        index: usize,
        original_url: impl Into<String>,
        cache_path: PathBuf,
        error: impl Into<String>,
    ) -> Self {
        Self {
            index,
            original_url: original_url.into(),
            cache_path,
            status: PictureStatus::Failed {
                error: error.into(),
            },
        }
    }

    pub fn is_migrated(&self) -> bool {
        matches!(self.status, PictureStatus::Migrated { .. })
    }

    /// New URL when migrated
    pub fn new_url(&self) -> Option<&str> {
        match &self.status {
            PictureStatus::Migrated { new_url, .. } => Some(new_url),
            PictureStatus::Failed { .. } => None,
        }
    }
}

/// Result of migrating one document
#[derive(Debug, Clone, Default, Serialize)]
pub struct MigrateResult {
    /// Document that was read
    pub source: PathBuf,
    /// Where the rewritten document was written
    pub output: PathBuf,
    /// One entry per picture reference, in document order
    pub outcomes: Vec<PictureOutcome>,
    /// Final document text
    #[serde(skip)]
    pub content: String,
}

impl MigrateResult {
    pub fn migrated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_migrated()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.migrated_count()
    }

    /// Failed outcomes, in document order
    pub fn failures(&self) -> impl Iterator<Item = &PictureOutcome> {
        self.outcomes.iter().filter(|o| !o.is_migrated())
    }

    /// Check if every picture was migrated
    pub fn is_success(&self) -> bool {
        self.failed_count() == 0
    }
}
