//! HTTP rendering of domain errors
//!
//! Every failure leaves the server as `{ "error": "<message>" }` with exactly
//! one status per error variant.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use datelog_domain::DateLogError;
use serde_json::json;
use tracing::error;

/// Error returned from route handlers and extractors.
#[derive(Debug)]
pub struct ApiError(pub DateLogError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        status_for(&self.0)
    }
}

impl From<DateLogError> for ApiError {
    fn from(value: DateLogError) -> Self {
        Self(value)
    }
}

/// Status code for each variant.
pub fn status_for(error: &DateLogError) -> StatusCode {
    match error {
        DateLogError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DateLogError::Validation(_) => StatusCode::BAD_REQUEST,
        DateLogError::NotFound(_) => StatusCode::NOT_FOUND,
        DateLogError::Storage(_) | DateLogError::Config(_) | DateLogError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error_type = self.0.label(), error = %self.0, "request failed");
        }

        (status, Json(json!({ "error": self.0.client_message() }))).into_response()
    }
}
