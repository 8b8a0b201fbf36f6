//! Domain Services
//!
//! Stateless business logic.

pub mod picture_locator;

pub use picture_locator::{locate_pictures, picture_urls};
