//! Paginated keyword search with a per-session result cache
//!
//! This crate is the search core of a hosting service: it runs keyword
//! queries against an injected full-text index, pages through results with
//! cheap next-page detection, and keeps a per-session result list patched
//! in place as the domain mutates.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  PagedSearchEngine                              │
//! │  criteria → index query (+1 probe) → resolve    │
//! └───────────────┬─────────────────────────────────┘
//!                 │ SearchIndex / EntityStore (host-injected)
//! ┌───────────────▼─────────────────────────────────┐
//! │  SessionResultCache                             │
//! │  load-once list, append/prune on domain events  │
//! └───────────────┬─────────────────────────────────┘
//!                 │ EventBus / delete flow
//! ┌───────────────▼─────────────────────────────────┐
//! │  CacheCoordinator                               │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use session_search::{
//!     InMemoryIndex, InMemoryStore, PagedSearchEngine, SearchCriteria,
//! };
//! use session_search::engine::{EntityId, Identified};
//! use std::sync::Arc;
//!
//! #[derive(Clone)]
//! struct Hotel { id: EntityId, name: String }
//!
//! impl Identified for Hotel {
//!     fn id(&self) -> EntityId { self.id }
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let index = Arc::new(InMemoryIndex::new());
//! let store: Arc<InMemoryStore<Hotel>> = Arc::new(InMemoryStore::new());
//! let engine = PagedSearchEngine::new("name", index, store);
//!
//! let mut criteria = SearchCriteria::new(10);
//! criteria.set_query("grand");
//! let page = engine.find(&criteria).await?;
//! println!("{} match(es), more: {}", page.len(), page.has_next);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod criteria;
pub mod engine;
pub mod error;

pub use cache::{CacheCoordinator, DeleteOutcome, EventBus, EventKind, ItemEvent, SessionResultCache};
pub use config::{CacheConfig, Config, EngineConfig};
pub use criteria::SearchCriteria;
pub use engine::{
    EntityId, EntityStore, Identified, InMemoryIndex, InMemoryStore, PagedSearchEngine,
    ResultPage, SearchError, SearchIndex, SearchResult,
};
pub use error::{Error, Result};
