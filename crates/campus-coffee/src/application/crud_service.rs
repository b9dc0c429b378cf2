//! Generic CRUD Application Service
//!
//! Forwards every operation to a `CrudDataService` and decides, on upsert,
//! whether the entity is created or updated.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DomainError, DomainModel};
use crate::ports::{CrudDataService, CrudService};

/// Application service for CRUD operations on entities of type `D`
///
/// Results and errors of the data service are returned unchanged.
pub struct GenericCrudService<D, R: ?Sized> {
    data: Arc<R>,
    _domain: PhantomData<fn() -> D>,
}

impl<D, R> GenericCrudService<D, R>
where
    D: DomainModel,
    R: CrudDataService<D> + ?Sized,
{
    pub fn new(data: Arc<R>) -> Self {
        Self {
            data,
            _domain: PhantomData,
        }
    }

    /// The underlying data service
    pub fn data_service(&self) -> &Arc<R> {
        &self.data
    }
}

impl<D, R: ?Sized> Clone for GenericCrudService<D, R> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            _domain: PhantomData,
        }
    }
}

#[async_trait]
impl<D, R> CrudService<D> for GenericCrudService<D, R>
where
    D: DomainModel,
    R: CrudDataService<D> + ?Sized,
{
    async fn get_all(&self) -> Result<Vec<D>, DomainError> {
        tracing::debug!("Retrieving all {} entities", D::TYPE_NAME);
        self.data.get_all().await
    }

    async fn get_by_id(&self, id: D::Id) -> Result<D, DomainError> {
        tracing::debug!("Retrieving {} with id {}", D::TYPE_NAME, id);
        self.data.get_by_id(id).await
    }

    async fn upsert(&self, domain: &D) -> Result<D, DomainError> {
        match domain.id() {
            None => {
                tracing::info!("Creating new {}", D::TYPE_NAME);
            }
            Some(id) => {
                tracing::info!("Updating {} with id {}", D::TYPE_NAME, id);
                // Fails with NotFound before anything is written
                self.data.get_by_id(id.clone()).await?;
            }
        }

        self.data.upsert(domain).await
    }

    async fn delete(&self, id: D::Id) -> Result<(), DomainError> {
        tracing::info!("Deleting {} with id {}", D::TYPE_NAME, id);
        self.data.delete(id).await
    }

    async fn clear(&self) -> Result<(), DomainError> {
        tracing::warn!("Clearing all {} entities", D::TYPE_NAME);
        self.data.clear().await
    }
}
