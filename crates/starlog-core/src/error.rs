//! Error types for starlog-core

use thiserror::Error;

/// Result type alias using starlog-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in starlog-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required field was empty or an argument failed a precondition
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A referenced id does not exist in the store
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error from the persistence or media backend
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while encoding or decoding a persisted record
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
