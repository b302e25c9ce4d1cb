//! # Store Errors
//!
//! The display text of a [`StoreError`] is safe to hand to HTTP callers.
//! Driver messages and SQL text never appear in it; they are logged where
//! the error is created.

use std::fmt;

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// The store operation that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    GetOne,
    GetAll,
    Save,
    Delete,
}

impl StoreOperation {
    /// Caller-facing failure message
    pub fn failure_message(&self) -> &'static str {
        match self {
            StoreOperation::GetOne => "cannot get record from database",
            StoreOperation::GetAll => "cannot get records from database",
            StoreOperation::Save => "cannot save record to database",
            StoreOperation::Delete => "cannot delete record from database",
        }
    }

    /// Short name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreOperation::GetOne => "get_by_id",
            StoreOperation::GetAll => "get_all",
            StoreOperation::Save => "upsert",
            StoreOperation::Delete => "delete",
        }
    }
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store-level failures
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The database could not be reached at startup
    #[error("cannot connect to the database at {0}")]
    Connect(String),

    /// A query failed
    #[error("{}", .0.failure_message())]
    Query(StoreOperation),
}

impl StoreError {
    /// Log the driver error and return the opaque failure for `operation`
    pub(crate) fn query(operation: StoreOperation, err: impl fmt::Display) -> Self {
        tracing::error!(operation = %operation, error = %err, "record store query failed");
        StoreError::Query(operation)
    }
}
