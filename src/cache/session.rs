//! Per-session result cache

use crate::engine::SearchResult;
use parking_lot::RwLock;
use std::future::Future;
use tokio::sync::Mutex;

/// Lazily populated, incrementally patched result list for one session
///
/// The cache has exactly two states: unpopulated (absent) and populated.
/// Population happens at most once per cycle, guarded by an async lock so
/// concurrent callers never trigger a duplicate load; `invalidate` starts a
/// new cycle. Event patches (`on_created`/`on_removed`) touch only the
/// in-memory list under a short lock and never perform I/O.
///
/// One instance belongs to one session; it is never shared across sessions.
pub struct SessionResultCache<T> {
    items: RwLock<Option<Vec<T>>>,
    load_lock: Mutex<()>,
    session_active: Box<dyn Fn() -> bool + Send + Sync>,
}

impl<T: Clone> SessionResultCache<T> {
    /// Create an unpopulated cache with no population precondition
    pub fn new() -> Self {
        Self::with_session_gate(|| true)
    }

    /// Create an unpopulated cache gated by a host-supplied predicate.
    ///
    /// While the gate reports inactive, `get_or_load` returns an empty list
    /// without invoking the loader and the cache stays unpopulated.
    pub fn with_session_gate(gate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            items: RwLock::new(None),
            load_lock: Mutex::new(()),
            session_active: Box::new(gate),
        }
    }

    /// Return the cached list, populating it through `loader` on first use.
    ///
    /// The loader runs at most once per population cycle. Callers arriving
    /// during a population block until it completes and observe the same
    /// loaded list. The loader future runs outside the items lock, so event
    /// patches on other sessions' caches are never serialized behind it.
    pub async fn get_or_load<F, Fut>(&self, loader: F) -> SearchResult<Vec<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = SearchResult<Vec<T>>>,
    {
        if let Some(items) = self.snapshot() {
            return Ok(items);
        }

        let _population = self.load_lock.lock().await;

        // A racing caller may have populated while we waited
        if let Some(items) = self.snapshot() {
            return Ok(items);
        }

        if !(self.session_active)() {
            tracing::debug!("Session not active, leaving cache unpopulated");
            return Ok(Vec::new());
        }

        let loaded = loader().await?;
        *self.items.write() = Some(loaded.clone());
        tracing::info!(count = loaded.len(), "Session cache populated");
        Ok(loaded)
    }

    /// Drop the cached list, returning to the unpopulated state
    pub fn invalidate(&self) {
        *self.items.write() = None;
    }

    /// True when a population cycle has completed
    pub fn is_populated(&self) -> bool {
        self.items.read().is_some()
    }

    /// Clone of the cached list, if populated
    pub fn snapshot(&self) -> Option<Vec<T>> {
        self.items.read().clone()
    }
}

impl<T: Clone + crate::engine::Identified> SessionResultCache<T> {
    /// Append a freshly created item to a populated cache.
    ///
    /// An unpopulated cache is left untouched; the next full load will
    /// include the item anyway.
    pub fn on_created(&self, item: T) {
        let mut guard = self.items.write();
        match guard.as_mut() {
            Some(items) => {
                tracing::info!(item_id = %item.id(), "Adding new item to cached results");
                items.push(item);
            }
            None => {
                tracing::info!("Cache not populated, skipping append");
            }
        }
    }

    /// Remove the first cached entry sharing `item`'s identity key.
    ///
    /// A miss or an unpopulated cache is a no-op.
    pub fn on_removed(&self, item: &T) {
        let mut guard = self.items.write();
        if let Some(items) = guard.as_mut() {
            if let Some(pos) = items.iter().position(|cached| cached.id() == item.id()) {
                items.remove(pos);
                tracing::info!(item_id = %item.id(), "Removed item from cached results");
            }
        }
    }
}

impl<T: Clone> Default for SessionResultCache<T> {
    fn default() -> Self {
        Self::new()
    }
}
