//! Error types for search operations

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while executing a paged search
///
/// Collaborator failures are never swallowed into an empty page; a caller
/// that receives `Ok` can trust the page contents.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The index collaborator failed to execute the query
    #[error("Index unavailable: {0}")]
    IndexUnavailable(String),

    /// The store collaborator failed to resolve or delete entities
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}
