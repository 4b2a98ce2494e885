//! Paged keyword search over injected index/store collaborators
//!
//! The engine runs one keyword query per page and decides next-page
//! availability by over-fetching a single probe row:
//!
//! ```text
//! criteria (query, page, page_size)
//!        │
//!        ▼
//! SearchIndex::search(field, term, offset, page_size + 1)   relevance-ranked ids
//!        │
//!        ▼
//! EntityStore::resolve(ids)                                 order preserved
//!        │
//!        ▼
//! ResultPage { items ≤ page_size, has_next, has_previous }
//! ```
//!
//! Blank queries short-circuit to the empty page without an index call.

mod error;
mod memory;
mod page;
mod service;
mod traits;

pub use error::{SearchError, SearchResult};
pub use memory::{InMemoryIndex, InMemoryStore};
pub use page::ResultPage;
pub use service::PagedSearchEngine;
pub use traits::{EntityId, EntityStore, Identified, SearchIndex};
