//! Observability for recordkeeper
//!
//! Logs are structured JSON, one event per line, emitted through `tracing`.
//! Request/response logging is done by the HTTP layer's trace middleware.

mod logging;

pub use logging::{init_logging, LoggingInitError, DEFAULT_FILTER};
