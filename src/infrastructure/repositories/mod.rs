//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod document;

pub use document::FsDocumentRepository;
