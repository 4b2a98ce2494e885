//! Result page payload

use serde::Serialize;

/// One page of search results plus pagination metadata
///
/// Each query produces a fresh, caller-owned page; pages never alias the
/// engine's buffers.
#[derive(Debug, Clone, Serialize)]
pub struct ResultPage<T> {
    /// Matching entities in relevance order, at most one page worth
    pub items: Vec<T>,

    /// Whether the index holds more matches beyond this page
    pub has_next: bool,

    /// Whether pages precede this one
    pub has_previous: bool,
}

impl<T> ResultPage<T> {
    /// Create a page from already-truncated items
    pub fn new(items: Vec<T>, has_next: bool, has_previous: bool) -> Self {
        Self {
            items,
            has_next,
            has_previous,
        }
    }

    /// The empty page: no items, no neighbors
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            has_next: false,
            has_previous: false,
        }
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the page, yielding its items
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ResultPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}
