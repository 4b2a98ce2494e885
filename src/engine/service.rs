//! Paged search engine implementation

use crate::criteria::SearchCriteria;
use crate::engine::error::SearchResult;
use crate::engine::page::ResultPage;
use crate::engine::traits::{EntityStore, SearchIndex};
use std::sync::Arc;

/// Executes keyword queries against the index one page at a time
///
/// The engine over-fetches by a single row to decide whether a next page
/// exists, then truncates the probe row away before handing the page to the
/// caller. It never issues a separate count query.
pub struct PagedSearchEngine<T> {
    index: Arc<dyn SearchIndex>,
    store: Arc<dyn EntityStore<Entity = T>>,
    field: String,
}

impl<T: Send + Sync> PagedSearchEngine<T> {
    /// Create an engine querying `field` on the given collaborators
    pub fn new(
        field: impl Into<String>,
        index: Arc<dyn SearchIndex>,
        store: Arc<dyn EntityStore<Entity = T>>,
    ) -> Self {
        Self {
            index,
            store,
            field: field.into(),
        }
    }

    /// The index field queries run against
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Execute the query described by `criteria` and return one page.
    ///
    /// A blank query yields the empty page without touching the index;
    /// collaborator failures propagate as errors rather than an empty page.
    pub async fn find(&self, criteria: &SearchCriteria) -> SearchResult<ResultPage<T>> {
        if criteria.is_blank() {
            tracing::debug!("Blank search term, skipping index query");
            return Ok(ResultPage::empty());
        }

        let ids = self
            .index
            .search(
                &self.field,
                criteria.query(),
                criteria.fetch_offset(),
                criteria.fetch_size(),
            )
            .await?;

        let mut items = self.store.resolve(&ids).await?;

        let has_next = items.len() > criteria.page_size();
        if has_next {
            // Drop the probe row; truncate keeps an independently owned Vec,
            // never a view into the resolve buffer
            items.truncate(criteria.page_size());
        }
        let has_previous = criteria.page() > 0;

        tracing::info!(
            found = items.len(),
            query = %criteria.query(),
            page_size = criteria.page_size(),
            "Search completed"
        );

        Ok(ResultPage::new(items, has_next, has_previous))
    }
}
