//! Error types for the local store.

use shared_types::DomainError;
use thiserror::Error;

/// Key-value backend failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A stored value could not be encoded or decoded.
    #[error("KV store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing the backing file failed.
    #[error("KV store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Backend specific failure (poisoned state, corrupt file, ...).
    #[error("KV store backend error: {message}")]
    Backend { message: String },
}

/// Shop settings failures.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
