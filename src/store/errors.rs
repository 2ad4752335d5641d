//! Store error types
//!
//! Failures are classified by kind at the persistence boundary; the HTTP
//! layer chooses a status code per kind, not per operation.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure kinds the HTTP layer maps to status codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// The document was rejected by the store's schema
    Validation,
    /// The query or mutation itself was malformed
    Query,
    /// The storage engine failed
    Internal,
}

/// Document store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Insert payload rejected by the collection schema
    #[error("document rejected: {0}")]
    InvalidDocument(String),

    /// Identifier that cannot name any document
    #[error("malformed document id: {0}")]
    MalformedId(String),

    /// Malformed filter or mutation descriptor
    #[error("invalid query: {0}")]
    Query(String),

    /// Storage engine failure
    #[error("storage failure: {0}")]
    Internal(String),
}

impl StoreError {
    /// The failure kind driving HTTP status selection
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::InvalidDocument(_) => StoreErrorKind::Validation,
            StoreError::MalformedId(_) | StoreError::Query(_) => StoreErrorKind::Query,
            StoreError::Internal(_) => StoreErrorKind::Internal,
        }
    }
}
