//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Document and picture references
//! - `value_objects/` - Store backend, remote object addressing
//! - `services/` - Picture locator
//! - `ports/` - Interface definitions for infrastructure
//!
//! All I/O goes through trait-defined ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
