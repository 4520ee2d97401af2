//! Domain-level error types.

use thiserror::Error;

/// Form input validation failures.
///
/// These are values handed back to the form for display next to the
/// offending field, never raised as failures inside the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Post content is required")]
    ContentRequired,

    #[error("Post content cannot exceed {max} characters")]
    ContentTooLong { max: usize },

    #[error("Scheduled time is required")]
    TimeRequired,

    #[error("Invalid date format")]
    InvalidTimeFormat,

    #[error("Please select a future date and time")]
    TimeNotInFuture,
}

/// Failures inside a storage adapter.
///
/// Contained behind the `PostStore` boundary: adapters log these and
/// hand callers a fallback value (empty read, failed-write boolean)
/// instead of propagating them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
