//! Data Ports
//!
//! Abstract interfaces for data persistence operations.

mod crud_data_service;

pub use crud_data_service::*;
