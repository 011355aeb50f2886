//! Unified error handling for the server.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use stockroom_catalog::CatalogError;
use stockroom_core::FieldErrors;
use thiserror::Error;

/// Application-level error type for the REST boundary.
///
/// Every variant maps to a status code and a JSON `{message}` body;
/// validation failures additionally carry an `errors` object keying each
/// offending field to its message, so the client can address every error to
/// a display slot.
#[derive(Debug, Error)]
pub enum AppError {
    /// Catalog operation failed (validation or missing identity).
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Login credential failed field validation.
    #[error("Login validation failed: {0}")]
    LoginRejected(FieldErrors),

    /// Login credential did not match the configured demo credential.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from client (unknown category, sort key, etc.).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "request error");

        match self {
            Self::Catalog(CatalogError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Validation failed",
                    "errors": errors,
                })),
            )
                .into_response(),
            Self::Catalog(CatalogError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": format!("Product {id} not found") })),
            )
                .into_response(),
            Self::LoginRejected(errors) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "message": "Invalid identifier or secret",
                    "errors": errors,
                })),
            )
                .into_response(),
            Self::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": message })),
            )
                .into_response(),
            Self::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": message })),
            )
                .into_response(),
        }
    }
}
