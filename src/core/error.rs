//! Typed error handling for the donation registry
//!
//! The search pipeline deliberately has a narrow failure surface:
//!
//! - malformed filter input is coerced to defaults by the normalizer and
//!   is not an error;
//! - an empty result set is a success with `total = 0`;
//! - any data-store failure (count query or page query) aborts the
//!   request and surfaces as HTTP 500 with a plain error string.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors that reach an HTTP handler.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The underlying data store failed. No partial results are kept;
    /// the whole request fails and nothing is retried.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl RegistryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failure envelope: `{"success": false, "error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();
        tracing::error!(%status, error = %message, "request failed");

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}
