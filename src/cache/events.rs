//! Domain events feeding the session cache

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Event kinds the cache reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum EventKind {
    /// An item was persisted (post-commit, best-effort delivery)
    Created,
    /// An item was deleted (synchronous with the user action)
    Deleted,
}

/// A domain event carrying the affected item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ItemEvent<T> {
    /// Item persisted by the host
    Created(T),
    /// Item deleted by the host
    Deleted(T),
}

impl<T> ItemEvent<T> {
    /// The kind of this event
    pub fn kind(&self) -> EventKind {
        match self {
            ItemEvent::Created(_) => EventKind::Created,
            ItemEvent::Deleted(_) => EventKind::Deleted,
        }
    }

    /// The item this event is about
    pub fn item(&self) -> &T {
        match self {
            ItemEvent::Created(item) | ItemEvent::Deleted(item) => item,
        }
    }
}

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// In-process event bus with per-kind delivery semantics
///
/// `Created` is fire-and-forget: with no subscriber the event is dropped
/// silently. `Deleted` is delivered synchronously to whoever subscribed.
/// Both run handlers on the publisher's thread; handlers must not block.
pub struct EventBus<T> {
    handlers: RwLock<HashMap<EventKind, Vec<Handler<T>>>>,
}

impl<T> EventBus<T> {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a handler for one event kind
    pub fn subscribe(&self, kind: EventKind, handler: impl Fn(&T) + Send + Sync + 'static) {
        self.handlers
            .write()
            .entry(kind)
            .or_default()
            .push(Arc::new(handler));
    }

    /// True when at least one handler is registered for `kind`
    pub fn has_subscribers(&self, kind: EventKind) -> bool {
        self.handlers
            .read()
            .get(&kind)
            .is_some_and(|handlers| !handlers.is_empty())
    }

    /// Deliver an event to every handler of its kind
    pub fn publish(&self, event: &ItemEvent<T>) {
        let kind = event.kind();
        let handlers: Vec<Handler<T>> = self
            .handlers
            .read()
            .get(&kind)
            .map(|handlers| handlers.clone())
            .unwrap_or_default();

        if handlers.is_empty() {
            tracing::debug!(event_kind = %kind, "No subscribers, dropping event");
            return;
        }

        for handler in handlers {
            handler(event.item());
        }
    }
}

impl<T> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_publish_without_subscribers_is_silent() {
        let bus: EventBus<String> = EventBus::new();
        bus.publish(&ItemEvent::Created("x".to_string()));
        assert!(!bus.has_subscribers(EventKind::Created));
    }

    #[test]
    fn test_handlers_scoped_to_kind() {
        let bus: EventBus<String> = EventBus::new();
        let created = Arc::new(AtomicUsize::new(0));
        let deleted = Arc::new(AtomicUsize::new(0));

        let counter = created.clone();
        bus.subscribe(EventKind::Created, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = deleted.clone();
        bus.subscribe(EventKind::Deleted, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        bus.publish(&ItemEvent::Created("a".to_string()));
        bus.publish(&ItemEvent::Created("b".to_string()));
        bus.publish(&ItemEvent::Deleted("a".to_string()));

        assert_eq!(created.load(Ordering::SeqCst), 2);
        assert_eq!(deleted.load(Ordering::SeqCst), 1);
    }
}
