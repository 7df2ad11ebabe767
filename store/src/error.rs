// Store Error Codes

use thiserror::Error;

/// Store operation result type
pub type StoreResult<T> = Result<T, StoreError>;

/// Content store error type
#[derive(Debug, Error)]
pub enum StoreError {
    /// No blob is stored at the requested locator
    #[error("Locator not found")]
    NotFound,

    /// A metadata document could not be encoded or decoded
    #[error("Invalid metadata document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// The underlying backend failed
    #[error("Store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}
