//! API Ports
//!
//! Interfaces the domain layer offers to its callers.

mod crud_service;

pub use crud_service::*;
