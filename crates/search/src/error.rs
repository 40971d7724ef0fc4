//! Error types for the search crate.
//!
//! Matching itself is total; only the JSON ranking entry points can fail.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Item list could not be parsed
    #[error("Invalid items: {0}")]
    InvalidItems(String),

    /// Results could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}
