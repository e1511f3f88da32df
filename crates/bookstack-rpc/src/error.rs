//! Translation of core errors into HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bookstack_core::CatalogError;
use serde_json::json;

/// Wrapper that maps `CatalogError` onto protocol-level responses.
///
/// The core raises typed errors and performs no protocol translation
/// itself; this boundary is the only place status codes are assigned.
pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            CatalogError::BookNotFound { .. } => StatusCode::NOT_FOUND,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
