//! Domain Errors
//!
//! Error types raised by data ports and passed through services unchanged.

use thiserror::Error;

use super::model::DomainModel;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    /// Not-found error for an entity type and ID
    pub fn not_found<D: DomainModel>(id: &D::Id) -> Self {
        Self::NotFound {
            entity_type: D::TYPE_NAME.to_string(),
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Product {
        id: Option<u32>,
    }

    impl DomainModel for Product {
        type Id = u32;
        const TYPE_NAME: &'static str = "Product";

        fn id(&self) -> Option<&u32> {
            self.id.as_ref()
        }
    }

    #[test]
    fn test_not_found_message() {
        let product = Product { id: Some(42) };
        let err = DomainError::not_found::<Product>(product.id().unwrap());
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Entity not found: Product with id 42");
    }

    #[test]
    fn test_other_variants_are_not_not_found() {
        assert!(!DomainError::Repository("connection reset".to_string()).is_not_found());
        assert!(!DomainError::Duplicate("name".to_string()).is_not_found());
    }
}
