//! Search criteria and page navigation

use serde::{Deserialize, Serialize};

/// Keyword query plus the page window it should be evaluated over.
///
/// A criteria value lives as long as its search context (typically one per
/// session) and is mutated by caller navigation. The page index is zero-based
/// and can never go negative; issuing a new query always rewinds to the first
/// page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchCriteria {
    /// User-supplied keyword text; blank means "no search"
    query: String,

    /// Current zero-based page index
    page: usize,

    /// Items displayed per page
    page_size: usize,
}

impl SearchCriteria {
    /// Create criteria with an empty query on the first page.
    ///
    /// A `page_size` of zero is clamped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            query: String::new(),
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replace the query text and rewind to the first page
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.first_page();
    }

    /// The current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    /// True when the query is empty or whitespace-only
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Current zero-based page index
    pub fn page(&self) -> usize {
        self.page
    }

    /// Items displayed per page
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Rewind to the first page
    pub fn first_page(&mut self) {
        self.page = 0;
    }

    /// Advance one page
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Go back one page, stopping at the first
    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Offset of the first row to fetch for the current page
    pub fn fetch_offset(&self) -> usize {
        self.page * self.page_size
    }

    /// Rows to fetch: one more than the page size, so the extra row signals
    /// that a next page exists without a separate count query
    pub fn fetch_size(&self) -> usize {
        self.page_size + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_never_goes_negative() {
        let mut criteria = SearchCriteria::new(10);
        criteria.previous_page();
        assert_eq!(criteria.page(), 0);

        criteria.next_page();
        criteria.next_page();
        assert_eq!(criteria.page(), 2);

        criteria.previous_page();
        assert_eq!(criteria.page(), 1);

        criteria.first_page();
        assert_eq!(criteria.page(), 0);
    }

    #[test]
    fn test_fetch_window_over_fetches_by_one() {
        let mut criteria = SearchCriteria::new(10);
        assert_eq!(criteria.fetch_offset(), 0);
        assert_eq!(criteria.fetch_size(), 11);

        criteria.next_page();
        assert_eq!(criteria.fetch_offset(), 10);
        assert_eq!(criteria.fetch_size(), 11);
    }

    #[test]
    fn test_new_query_rewinds_to_first_page() {
        let mut criteria = SearchCriteria::new(5);
        criteria.next_page();
        criteria.set_query("grand");
        assert_eq!(criteria.page(), 0);
        assert_eq!(criteria.query(), "grand");
    }

    #[test]
    fn test_blank_query_detection() {
        let mut criteria = SearchCriteria::new(5);
        assert!(criteria.is_blank());
        criteria.set_query("   ");
        assert!(criteria.is_blank());
        criteria.set_query("grand");
        assert!(!criteria.is_blank());
    }

    #[test]
    fn test_zero_page_size_clamped() {
        let criteria = SearchCriteria::new(0);
        assert_eq!(criteria.page_size(), 1);
        assert_eq!(criteria.fetch_size(), 2);
    }
}
