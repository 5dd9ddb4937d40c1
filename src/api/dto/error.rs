//! Error response DTO.

use serde::Serialize;
use utoipa::ToSchema;

/// Uniform error envelope used for every failure response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always the literal "error"
    pub status: String,
    /// Human-readable failure description
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            error: error.into(),
        }
    }
}
