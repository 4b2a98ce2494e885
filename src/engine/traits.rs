//! Collaborator trait abstractions
//!
//! The engine owns no index or storage of its own. Hosts inject these two
//! boundaries, typically as `Arc<dyn SearchIndex>` / `Arc<dyn EntityStore>`.

use crate::engine::error::SearchResult;
use async_trait::async_trait;
use uuid::Uuid;

/// Identifier handed back by the index and resolved by the store
pub type EntityId = Uuid;

/// Entities that expose a stable identity key
///
/// Cache removal matches on this key rather than on full equality, so a
/// cached copy whose other fields have drifted is still found.
pub trait Identified {
    /// The entity's identity key
    fn id(&self) -> EntityId;
}

/// Full-text index boundary
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Run a keyword query for `term` against `field`, returning matching
    /// entity ids in relevance order.
    ///
    /// Results must be deterministic for identical inputs against an
    /// unchanged index. `offset`/`limit` select the fetch window; the engine
    /// passes a limit one larger than the page size.
    async fn search(
        &self,
        field: &str,
        term: &str,
        offset: usize,
        limit: usize,
    ) -> SearchResult<Vec<EntityId>>;
}

/// Persistence boundary resolving ids to entities
#[async_trait]
pub trait EntityStore: Send + Sync {
    /// Entity type this store produces
    type Entity: Send + Sync;

    /// Resolve ids to full entities, preserving the input order.
    ///
    /// Ids the store no longer knows are skipped, not errors.
    async fn resolve(&self, ids: &[EntityId]) -> SearchResult<Vec<Self::Entity>>;

    /// Delete by id. Returns `false` when the entity was already gone.
    async fn delete(&self, id: EntityId) -> SearchResult<bool>;
}
