//! Startup error types
//!
//! Every startup error is fatal: the process exits without serving traffic.

use thiserror::Error;

use crate::observability::LoggingInitError;
use crate::store::StoreError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Startup failures
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or invalid setting
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    Logging(#[from] LoggingInitError),

    /// The database could not be opened
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The listener could not be bound
    #[error("cannot listen on {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The server stopped with an I/O error
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        CliError::Config(err.to_string())
    }
}
