//! Session-scoped result caching
//!
//! One [`SessionResultCache`] per active session holds a lazily loaded
//! result list and keeps it consistent with domain mutations without
//! re-querying: creations append, deletions prune, and `invalidate` starts
//! a new population cycle. The [`CacheCoordinator`] wires those triggers
//! (event bus, user-initiated deletes, session start) to the cache.

mod coordinator;
mod events;
mod session;

pub use coordinator::{CacheCoordinator, DeleteOutcome};
pub use events::{EventBus, EventKind, ItemEvent};
pub use session::SessionResultCache;
