//! Conversion of API errors into HTTP responses.
//!
//! Every failure renders as the uniform error envelope with the status code
//! chosen at the operation boundary.

use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::dto::ErrorEnvelope;
use crate::error::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(error = ?self.source, "Request failed");
        } else {
            tracing::debug!(error = %self.source, status = %self.status, "Request rejected");
        }

        (self.status, Json(ErrorEnvelope::new(self.source.to_string()))).into_response()
    }
}
