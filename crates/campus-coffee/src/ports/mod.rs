//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with its callers (`api`) and with storage (`data`).
//!
//! Implementations of the data ports live in the infrastructure layer.

pub mod api;
pub mod data;

// Re-exports
pub use api::*;
pub use data::*;
