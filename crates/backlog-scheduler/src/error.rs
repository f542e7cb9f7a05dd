//! Error types for the scheduler.

use thiserror::Error;

/// Errors that can occur in scheduler operations.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// A store call failed.
    #[error("store error: {0}")]
    Store(#[from] backlog_store::StoreError),

    /// Invalid task configuration, rejected at startup.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
