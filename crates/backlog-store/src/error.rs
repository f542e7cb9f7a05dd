//! Error types for the item store.

use thiserror::Error;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item with the given id exists.
    #[error("item not found: {0}")]
    NotFound(u64),

    /// The store backend failed (I/O, connection loss, etc.).
    #[error("store backend error: {0}")]
    Backend(String),
}
