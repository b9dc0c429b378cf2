//! Domain Model - identifier contract shared by all entities

use std::fmt;

/// A domain entity identified by a single, immutable-once-assigned ID.
///
/// An entity without an ID has not been persisted yet; the data layer
/// assigns the ID on first upsert.
pub trait DomainModel: Send + Sync + 'static {
    /// Identifier type (e.g. `Uuid`)
    type Id: Clone + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Entity name used in log lines and error messages
    const TYPE_NAME: &'static str;

    /// The entity's ID, `None` until persisted
    fn id(&self) -> Option<&Self::Id>;

    /// Whether the entity has not been persisted yet
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}
