//! # REST API Errors
//!
//! Every handler failure ends up as exactly one of these, and each maps to
//! one status code with a `{"message": ...}` body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::records::DecodeError;
use crate::store::StoreError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Request body is not a decodable record
    #[error("could not parse submitted record")]
    InvalidBody,

    /// Update body names a different id than the path
    #[error("cannot update record id")]
    IdMismatch,

    /// No record with the requested id
    #[error("record not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure; the message is already opaque
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidBody | RestError::IdMismatch => StatusCode::BAD_REQUEST,
            RestError::NotFound => StatusCode::NOT_FOUND,
            RestError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DecodeError> for RestError {
    fn from(err: DecodeError) -> Self {
        tracing::warn!(error = %err, "rejected request body");
        RestError::InvalidBody
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreOperation;

    #[test]
    fn test_status_codes() {
        assert_eq!(RestError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RestError::IdMismatch.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RestError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            RestError::Store(StoreError::Query(StoreOperation::GetAll)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ErrorResponse::from(RestError::NotFound).message,
            "record not found"
        );
        assert_eq!(
            ErrorResponse::from(RestError::IdMismatch).message,
            "cannot update record id"
        );
        assert_eq!(
            ErrorResponse::from(RestError::InvalidBody).message,
            "could not parse submitted record"
        );
        assert_eq!(
            ErrorResponse::from(RestError::Store(StoreError::Query(StoreOperation::Delete)))
                .message,
            "cannot delete record from database"
        );
    }

    #[test]
    fn test_decode_error_conversion_hides_parse_detail() {
        let decode_err = crate::records::decode_create(b"{oops").unwrap_err();
        let rest_err = RestError::from(decode_err);
        assert_eq!(rest_err.to_string(), "could not parse submitted record");
    }
}
