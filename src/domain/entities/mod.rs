//! Domain Entities
//!
//! - `Document` - A markdown file being migrated
//! - `PictureRef` - One embedded-image reference inside a document

mod document;
mod picture;

pub use document::Document;
pub use picture::{PictureRef, CACHE_EXTENSION, CACHE_TIMESTAMP_FORMAT};
