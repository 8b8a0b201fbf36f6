//! picbed - markdown picture migration tool
//!
//! picbed finds the images embedded in a markdown document, re-hosts each of
//! them on a cloud object-storage bucket (a "picture bed") and writes a copy
//! of the document whose image URLs point at the new location.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{MigrateOptions, MigrateResult, MigrateUseCase, PictureTransfer};
pub use config::Config;
pub use domain::entities::{Document, PictureRef};
pub use domain::services::locate_pictures;
pub use error::{PicbedError, PicbedResult};
