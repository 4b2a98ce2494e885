use thiserror::Error;

use crate::engine::SearchError;

/// Crate-level result type
pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error types
#[derive(Error, Debug)]
pub enum Error {
    /// Search collaborator errors
    #[error("Search error: {0}")]
    Search(#[from] SearchError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Configuration(err.to_string())
    }
}
