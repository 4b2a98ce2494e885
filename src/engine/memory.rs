//! In-memory collaborators (for MVP and testing)

use crate::engine::error::SearchResult;
use crate::engine::traits::{EntityId, EntityStore, Identified, SearchIndex};
use async_trait::async_trait;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;

/// One indexed field value
#[derive(Debug, Clone)]
struct IndexEntry {
    id: EntityId,
    field: String,
    tokens: Vec<String>,
}

/// In-memory keyword index
///
/// Tokenizes on whitespace, lowercased, and matches a single exact term.
/// Ranking is insertion order, which keeps results deterministic for an
/// unchanged index.
#[derive(Default)]
pub struct InMemoryIndex {
    entries: RwLock<Vec<IndexEntry>>,
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `text` for `field` on the given entity
    pub fn insert(&self, id: EntityId, field: impl Into<String>, text: &str) {
        let entry = IndexEntry {
            id,
            field: field.into(),
            tokens: tokenize(text),
        };
        self.entries.write().push(entry);
    }

    /// Drop all postings for an entity
    pub fn remove(&self, id: EntityId) {
        self.entries.write().retain(|entry| entry.id != id);
    }

    /// Number of indexed field values
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// True when nothing is indexed
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

#[async_trait]
impl SearchIndex for InMemoryIndex {
    async fn search(
        &self,
        field: &str,
        term: &str,
        offset: usize,
        limit: usize,
    ) -> SearchResult<Vec<EntityId>> {
        let term = term.to_lowercase();
        let ids = self
            .entries
            .read()
            .iter()
            .filter(|entry| entry.field == field && entry.tokens.iter().any(|t| *t == term))
            .map(|entry| entry.id)
            .skip(offset)
            .take(limit)
            .collect();
        Ok(ids)
    }
}

/// Lowercase whitespace tokenization
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.to_lowercase())
        .collect()
}

/// In-memory entity store (for MVP and testing)
#[derive(Clone)]
pub struct InMemoryStore<T> {
    entities: Arc<DashMap<EntityId, T>>,
}

impl<T: Identified + Clone + Send + Sync> InMemoryStore<T> {
    pub fn new() -> Self {
        Self {
            entities: Arc::new(DashMap::new()),
        }
    }

    /// Seed the store with an entity
    pub fn insert(&self, entity: T) {
        self.entities.insert(entity.id(), entity);
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// True when the store holds no entities
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl<T: Identified + Clone + Send + Sync> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Identified + Clone + Send + Sync> EntityStore for InMemoryStore<T> {
    type Entity = T;

    async fn resolve(&self, ids: &[EntityId]) -> SearchResult<Vec<T>> {
        // Input order is the relevance order and must survive resolution
        Ok(ids
            .iter()
            .filter_map(|id| self.entities.get(id).map(|entry| entry.clone()))
            .collect())
    }

    async fn delete(&self, id: EntityId) -> SearchResult<bool> {
        let removed = self.entities.remove(&id).is_some();
        if removed {
            tracing::debug!(entity_id = %id, "Entity deleted");
        }
        Ok(removed)
    }
}
