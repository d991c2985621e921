//! Store error types.

use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store directory.
    #[error("Failed to open store: {0}")]
    Open(std::io::Error),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to read or write a key file.
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters outside `[A-Za-z0-9._-]`.
    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),
}
