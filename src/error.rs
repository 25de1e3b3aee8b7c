//! Error types for the revalidation service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Expiry Error Enum ==
/// Unified error type for the revalidation service.
#[derive(Error, Debug)]
pub enum ExpiryError {
    /// Tag has never been expired (or its record was pruned)
    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    /// Tag failed validation
    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ExpiryError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ExpiryError::UnknownTag(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ExpiryError::InvalidTag(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ExpiryError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the revalidation service.
pub type Result<T> = std::result::Result<T, ExpiryError>;
