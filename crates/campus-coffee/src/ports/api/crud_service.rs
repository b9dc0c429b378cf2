//! CRUD Service Port
//!
//! The surface controllers and other services depend on. Mirrors
//! `CrudDataService` so a service can stand in wherever callers need
//! create/read/update/delete for one entity type.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, DomainModel};

/// Service interface for CRUD operations on one entity type
///
/// Entity-specific services usually wrap `GenericCrudService` and
/// delegate, replacing only the operations they need to change
/// (typically `upsert`).
#[async_trait]
pub trait CrudService<D: DomainModel>: Send + Sync {
    /// Get all entities
    async fn get_all(&self) -> Result<Vec<D>, DomainError>;

    /// Get an entity by ID
    async fn get_by_id(&self, id: D::Id) -> Result<D, DomainError>;

    /// Create the entity if it has no ID, otherwise update it
    async fn upsert(&self, domain: &D) -> Result<D, DomainError>;

    /// Delete an entity by ID
    async fn delete(&self, id: D::Id) -> Result<(), DomainError>;

    /// Delete all entities
    async fn clear(&self) -> Result<(), DomainError>;
}
