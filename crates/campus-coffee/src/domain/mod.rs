//! Domain Layer
//!
//! Pure domain contracts without infrastructure dependencies.
//! Contains the entity identifier contract and the domain errors.

pub mod errors;
pub mod model;

// Re-exports for convenience
pub use errors::*;
pub use model::*;
