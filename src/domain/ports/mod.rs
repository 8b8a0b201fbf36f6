//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod document_repository;
pub mod migrate_events;
pub mod picture_source;
pub mod picture_store;

pub use clock::{Clock, SystemClock};
pub use document_repository::DocumentRepository;
pub use migrate_events::{MigrateEvent, MigrateEventSink, NoopEventSink};
pub use picture_source::PictureSource;
pub use picture_store::{PictureStore, StoreError, StoreResult};
