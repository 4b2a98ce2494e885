//! Cache lifecycle orchestration

use crate::cache::events::{EventBus, EventKind};
use crate::cache::session::SessionResultCache;
use crate::engine::{EntityStore, Identified, SearchResult};
use std::sync::Arc;

/// Outcome of a coordinated delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum DeleteOutcome {
    /// The store deleted the item
    Deleted,
    /// The item was already gone; informational, not an error
    AlreadyGone,
}

/// Routes domain events and user actions into one session's cache
///
/// Creation events arrive post-commit through the event bus and patch the
/// cache in place. Deletion is the synchronous path: `delete` issues the
/// store delete and prunes the cache in the same flow.
pub struct CacheCoordinator<T> {
    cache: Arc<SessionResultCache<T>>,
    store: Arc<dyn EntityStore<Entity = T>>,
}

impl<T: Identified + Clone + Send + Sync + 'static> CacheCoordinator<T> {
    pub fn new(
        cache: Arc<SessionResultCache<T>>,
        store: Arc<dyn EntityStore<Entity = T>>,
    ) -> Self {
        Self { cache, store }
    }

    /// The cache this coordinator manages
    pub fn cache(&self) -> &Arc<SessionResultCache<T>> {
        &self.cache
    }

    /// Subscribe the cache to the host's domain events.
    ///
    /// `Created` appends to a populated cache; `Deleted` prunes defensively,
    /// for hosts that deliver deletions as events instead of (or in addition
    /// to) calling [`delete`](Self::delete).
    pub fn attach(&self, bus: &EventBus<T>) {
        let cache = self.cache.clone();
        bus.subscribe(EventKind::Created, move |item: &T| {
            cache.on_created(item.clone());
        });

        let cache = self.cache.clone();
        bus.subscribe(EventKind::Deleted, move |item: &T| {
            cache.on_removed(item);
        });
    }

    /// Delete `item` from the store and prune it from the cache.
    ///
    /// The cache removal happens even when the store reports the item
    /// already gone, so a stale cached entry cannot outlive the entity.
    pub async fn delete(&self, item: &T) -> SearchResult<DeleteOutcome> {
        tracing::info!(item_id = %item.id(), "Deleting item");
        let deleted = self.store.delete(item.id()).await?;

        self.cache.on_removed(item);

        if deleted {
            Ok(DeleteOutcome::Deleted)
        } else {
            tracing::info!(item_id = %item.id(), "Item was already deleted");
            Ok(DeleteOutcome::AlreadyGone)
        }
    }

    /// Start a fresh session: the cache reverts to unpopulated
    pub fn on_session_started(&self) {
        self.cache.invalidate();
    }

    /// Force the next read to reload from the collaborators
    pub fn refresh(&self) {
        self.cache.invalidate();
    }
}
