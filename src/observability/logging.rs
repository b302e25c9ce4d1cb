//! Structured JSON logging
//!
//! One JSON object per line on stdout. The filter comes from `RUST_LOG`
//! when set, otherwise [`DEFAULT_FILTER`].

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "recordkeeper=info,tower_http=info";

/// The global subscriber could not be installed
#[derive(Debug, Error)]
#[error("cannot initialise logging: {0}")]
pub struct LoggingInitError(String);

/// Install the global JSON subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> Result<(), LoggingInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| LoggingInitError(e.to_string()))
}
