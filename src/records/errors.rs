//! Payload decoding errors

use thiserror::Error;

/// Result type for payload decoding
pub type DecodeResult<T> = Result<T, DecodeError>;

/// A submitted payload could not be turned into a record.
///
/// The wrapped parse error is meant for the server log only.
#[derive(Debug, Error)]
#[error("could not parse submitted record: {0}")]
pub struct DecodeError(#[from] serde_json::Error);
