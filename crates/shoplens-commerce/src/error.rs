//! Commerce error types.

use thiserror::Error;

/// Errors raised around the search engine.
///
/// Searches themselves never fail. These cover construction from invalid
/// tables or config, sort-key parsing and the search-history store.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Unknown sort key.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// History store failure.
    #[error("History error: {0}")]
    History(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<std::io::Error> for CommerceError {
    fn from(e: std::io::Error) -> Self {
        CommerceError::History(e.to_string())
    }
}
