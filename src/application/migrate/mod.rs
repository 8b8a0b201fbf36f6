//! Migrate Use Case
//!
//! Moves the pictures of a markdown document to the picture bed.
//!
//! This module handles:
//! - Locating `![alt](url)` references in a loaded document
//! - Fetching and re-uploading each picture through a cache directory
//! - Substituting new URLs and writing the document to the output directory

mod options;
mod result;
mod use_case;

pub use options::{MigrateOptions, DEFAULT_CACHE_DIR, DEFAULT_OUTPUT_DIR};
pub use result::{MigrateResult, PictureOutcome, PictureStatus};
pub use use_case::MigrateUseCase;
