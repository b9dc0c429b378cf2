//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations on top of the data ports.

mod crud_service;

pub use crud_service::GenericCrudService;
