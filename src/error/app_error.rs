use axum::http::StatusCode;
use thiserror::Error;

/// Application-wide error type covering every failure the service can raise.
///
/// Variants follow the failure taxonomy of the user API: missing records and
/// store faults, denied access checks, business-rule validation failures,
/// malformed input, and authentication failures.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found with entity, field, and value information
    #[error("{entity} not found: {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Access policy denied the operation
    #[error("{reason}")]
    AccessDenied { reason: String },

    /// Business-rule validation failure (duplicate email, password mismatch, ...)
    #[error("{message}")]
    Validation { message: String },

    /// Malformed or shape-invalid request input
    #[error("{message}")]
    BadRequest { message: String },

    /// Missing or invalid authentication token
    #[error("{message}")]
    Unauthorized { message: String },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn not_found(entity: &str, field: &str, value: impl ToString) -> Self {
        AppError::NotFound {
            entity: entity.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    pub fn access_denied(reason: impl Into<String>) -> Self {
        AppError::AccessDenied {
            reason: reason.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        AppError::Unauthorized {
            message: message.into(),
        }
    }

    pub fn database(operation: &str, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        AppError::Database {
            operation: operation.to_string(),
            source: anyhow::Error::new(source),
        }
    }

    pub fn internal(source: anyhow::Error) -> Self {
        AppError::Internal { source }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;

/// HTTP-layer error pairing a domain error with the response status code.
///
/// Each operation maps all of its failures to a single status code (403 for
/// the operations addressing an existing user, 400 for create and list), so
/// the code is chosen at the operation boundary rather than per error kind.
/// The response body is always the uniform error envelope.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub source: AppError,
}

impl ApiError {
    pub fn new(status: StatusCode, source: AppError) -> Self {
        Self { status, source }
    }

    pub fn forbidden(source: AppError) -> Self {
        Self::new(StatusCode::FORBIDDEN, source)
    }

    pub fn bad_request(source: AppError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, source)
    }

    pub fn unauthorized(source: AppError) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, source)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.source, self.status)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
