//! Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use session_search::engine::{
    EntityId, EntityStore, Identified, InMemoryIndex, InMemoryStore, SearchError, SearchIndex,
    SearchResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use uuid::Uuid;

static TRACING: Once = Once::new();

/// Install a test subscriber honoring `RUST_LOG`
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Minimal searchable entity
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
}

impl Identified for Item {
    fn id(&self) -> EntityId {
        self.id
    }
}

/// Create a test item
pub fn item(name: &str) -> Item {
    Item {
        id: Uuid::new_v4(),
        name: name.to_string(),
    }
}

/// Seed matching fixtures into an index/store pair, returning them in
/// relevance (insertion) order
pub fn seed(index: &InMemoryIndex, store: &InMemoryStore<Item>, names: &[&str]) -> Vec<Item> {
    names
        .iter()
        .map(|name| {
            let entity = item(name);
            index.insert(entity.id, "name", &entity.name);
            store.insert(entity.clone());
            entity
        })
        .collect()
}

/// Index wrapper that counts how often it is queried
pub struct CountingIndex {
    inner: InMemoryIndex,
    calls: AtomicUsize,
}

impl CountingIndex {
    pub fn new(inner: InMemoryIndex) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchIndex for CountingIndex {
    async fn search(
        &self,
        field: &str,
        term: &str,
        offset: usize,
        limit: usize,
    ) -> SearchResult<Vec<EntityId>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.search(field, term, offset, limit).await
    }
}

/// Index that is always down
pub struct FailingIndex;

#[async_trait]
impl SearchIndex for FailingIndex {
    async fn search(
        &self,
        _field: &str,
        _term: &str,
        _offset: usize,
        _limit: usize,
    ) -> SearchResult<Vec<EntityId>> {
        Err(SearchError::IndexUnavailable("index offline".to_string()))
    }
}

/// Store that is always down
pub struct FailingStore;

#[async_trait]
impl EntityStore for FailingStore {
    type Entity = Item;

    async fn resolve(&self, _ids: &[EntityId]) -> SearchResult<Vec<Item>> {
        Err(SearchError::StoreUnavailable("store offline".to_string()))
    }

    async fn delete(&self, _id: EntityId) -> SearchResult<bool> {
        Err(SearchError::StoreUnavailable("store offline".to_string()))
    }
}

/// Fresh in-memory index/store pair
pub fn collaborators() -> (Arc<InMemoryIndex>, Arc<InMemoryStore<Item>>) {
    (Arc::new(InMemoryIndex::new()), Arc::new(InMemoryStore::new()))
}
