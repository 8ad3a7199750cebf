//! Generic repository trait for data-store access.

use std::fmt::Debug;

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// Each entity gets a strongly typed repository through the associated
/// types. Implementations own their connection handle; callers hold them
/// behind an `Arc` and never share mutable state between requests.
#[async_trait]
pub trait Repository: Debug + Send + Sync + 'static {
    /// The persisted entity.
    type Entity: Send + Sync + 'static;
    /// Primary key type.
    type Id: Copy + Send + Sync + 'static;
    /// Input accepted by [`Repository::create`].
    type Create: Send + Sync + 'static;

    /// List every entity, newest (highest id) first.
    async fn find_all(&self) -> AppResult<Vec<Self::Entity>>;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Self::Id) -> AppResult<Option<Self::Entity>>;

    /// Insert a new entity and return it as stored.
    async fn create(&self, input: &Self::Create) -> AppResult<Self::Entity>;

    /// Persist every mutable field of `entity` and return the stored row.
    ///
    /// Returns `None` when the row vanished between fetch and persist.
    async fn update(&self, entity: &Self::Entity) -> AppResult<Option<Self::Entity>>;

    /// Delete an entity by its primary key. Returns `true` if a row was removed.
    async fn delete(&self, id: Self::Id) -> AppResult<bool>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
