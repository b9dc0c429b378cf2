//! CRUD Data Service Port
//!
//! Raw storage operations for any entity implementing `DomainModel`.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, DomainModel};

/// Data access interface for a single entity type
///
/// Implementations own storage, ID assignment and not-found detection.
#[async_trait]
pub trait CrudDataService<D: DomainModel>: Send + Sync {
    /// Find all entities
    async fn get_all(&self) -> Result<Vec<D>, DomainError>;

    /// Find an entity by ID, `DomainError::NotFound` if absent
    async fn get_by_id(&self, id: D::Id) -> Result<D, DomainError>;

    /// Save an entity (insert when it has no ID, update otherwise)
    async fn upsert(&self, domain: &D) -> Result<D, DomainError>;

    /// Delete an entity by ID
    async fn delete(&self, id: D::Id) -> Result<(), DomainError>;

    /// Delete all entities
    async fn clear(&self) -> Result<(), DomainError>;
}
