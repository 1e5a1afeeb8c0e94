//! Store error types.

use thiserror::Error;

/// Errors raised while loading or persisting the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O failure in a backend.
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted document could not be encoded or decoded.
    #[error("Store document is invalid: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A previous writer panicked while holding the store lock.
    #[error("Store lock poisoned")]
    LockPoisoned,

    /// The backend refused the write.
    #[error("Store write rejected: {0}")]
    WriteRejected(String),
}
