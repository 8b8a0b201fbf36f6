//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `MigrateUseCase` - Load a document, move its pictures, write it back
//!
//! ## Services
//!
//! - `PictureTransfer` - Fetch a picture and upload it to the picture bed

pub mod migrate;
pub mod transfer;

pub use migrate::{
    MigrateOptions, MigrateResult, MigrateUseCase, PictureOutcome, PictureStatus,
};
pub use transfer::PictureTransfer;
