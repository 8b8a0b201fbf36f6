//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod remote_object;
mod store_backend;

pub use remote_object::{remote_key, RemoteObject};
pub use store_backend::StoreBackend;
