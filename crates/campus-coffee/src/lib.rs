//! Campus Coffee Domain Library
//!
//! Generic CRUD plumbing shared by the Campus Coffee entities.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): entity contract and errors
//!   - `model`: `DomainModel`, the single-identifier contract
//!   - `errors`: `DomainError`, raised by data ports
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `api/`: `CrudService`, what callers depend on
//!   - `data/`: `CrudDataService`, what storage adapters implement
//!
//! - **Application Layer** (`application/`): `GenericCrudService`,
//!   which forwards to a data port and decides create vs. update
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use campus_coffee::{CrudService, GenericCrudService};
//!
//! let service = GenericCrudService::new(Arc::new(PgPosDataService::new(pool)));
//! let saved = service.upsert(&pos).await?;
//! ```

pub mod application;
pub mod domain;
pub mod ports;
pub mod telemetry;

// Re-export commonly used types
pub use application::GenericCrudService;
pub use domain::{DomainError, DomainModel};
pub use ports::{CrudDataService, CrudService};
