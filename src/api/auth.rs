//! Bearer-token authentication extractor.
//!
//! Declaring a `Credentials` parameter on a handler marks its route as
//! auth-required: the token is resolved before the handler body runs, and
//! an unauthenticated request is rejected with the error envelope without
//! touching the persistence store.

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};
use uuid::Uuid;

use crate::error::{ApiError, AppError, AppResult};
use crate::models::Credentials;
use crate::state::AppState;
use crate::utils::jwt::{validate_token, Claims};

impl FromRequestParts<AppState> for Credentials {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                ApiError::unauthorized(AppError::unauthorized("Missing authorization header"))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized(AppError::unauthorized(
                "Invalid authorization header format. Expected: Bearer <token>",
            ))
        })?;

        let claims = validate_token(token, &state.jwt.secret).map_err(ApiError::unauthorized)?;

        credentials_from_claims(claims).map_err(ApiError::unauthorized)
    }
}

fn credentials_from_claims(claims: Claims) -> AppResult<Credentials> {
    let user_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::unauthorized("Invalid token subject"))?;
    Ok(Credentials {
        user_id,
        email: claims.email,
        username: claims.username,
    })
}
