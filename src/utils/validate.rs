use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{ApiError, AppError};

/// JSON body extractor that enforces the declared input shape before the
/// handler runs: serde covers required/optional fields and types, and
/// `validator` constraints cover field-level rules. Rejections use the
/// uniform error envelope with status 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(AppError::bad_request(rejection.body_text())))?;
        value
            .validate()
            .map_err(|errors| ApiError::bad_request(AppError::validation(validation_message(&errors))))?;
        Ok(ValidatedJson(value))
    }
}

/// Flattens validator errors into a single deterministic message.
fn validation_message(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            let message = error.message.as_deref().unwrap_or("invalid value");
            parts.push(format!("{}: {}", field, message));
        }
    }
    parts.sort();
    parts.join(", ")
}
