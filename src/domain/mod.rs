//! Domain layer - Pure business abstractions
//!
//! Only error types live here; the catalog operations depend on nothing else.

pub mod errors;

pub use errors::{CatalogError, Result};
