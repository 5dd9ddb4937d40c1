//! User resource handlers.
//!
//! Each operation follows the same protocol: resolve the caller (for
//! auth-required routes the `Credentials` extractor has already run),
//! delegate to the service, and shape the result. All failures inside an
//! operation map to a single status code: 403 for operations addressing an
//! existing user, 400 for create and list.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::doc::USER_TAG;
use crate::api::dto::{
    AuthResponse, CreateUserRequest, ErrorEnvelope, UpdateUserRequest, UserResponse,
};
use crate::error::ApiError;
use crate::models::Credentials;
use crate::state::AppState;
use crate::utils::jwt::generate_token;
use crate::utils::validate::ValidatedJson;

/// GET /user/{userId} - Fetch a single user.
#[utoipa::path(
    get,
    path = "/user/{userId}",
    tag = USER_TAG,
    params(("userId" = String, Path, description = "Target user id")),
    responses(
        (status = 200, description = "The requested user", body = UserResponse),
        (status = 403, description = "Operation failed", body = ErrorEnvelope)
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .services
        .users
        .get_user(&credentials, &user_id)
        .await
        .map_err(ApiError::forbidden)?;
    Ok(Json(UserResponse::from(user)))
}

/// GET /user - List all users.
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 400, description = "Operation failed", body = ErrorEnvelope)
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_users(
    State(state): State<AppState>,
    _credentials: Credentials,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state
        .services
        .users
        .list_users()
        .await
        .map_err(ApiError::bad_request)?;
    let responses: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(Json(responses))
}

/// POST /user - Create a new user and issue a session token.
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Created user with session token", body = AuthResponse),
        (status = 400, description = "Operation failed", body = ErrorEnvelope)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = state
        .services
        .users
        .create_user(payload.into_new_user())
        .await
        .map_err(ApiError::bad_request)?;

    let token = generate_token(&user, &state.jwt.secret, state.jwt.token_expiration)
        .map_err(ApiError::bad_request)?;

    Ok(Json(AuthResponse {
        auth_token: token,
        user: UserResponse::from(user),
    }))
}

/// PUT /user/{userId} - Merge the supplied fields into a user.
#[utoipa::path(
    put,
    path = "/user/{userId}",
    tag = USER_TAG,
    params(("userId" = String, Path, description = "Target user id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "The updated user", body = UserResponse),
        (status = 403, description = "Operation failed", body = ErrorEnvelope)
    ),
    security(("bearerAuth" = []))
)]
pub async fn update_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(user_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .services
        .users
        .update_user(&credentials, &user_id, payload.into_update_user())
        .await
        .map_err(ApiError::forbidden)?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /user/{userId} - Delete a user, returning the removed record.
#[utoipa::path(
    delete,
    path = "/user/{userId}",
    tag = USER_TAG,
    params(("userId" = String, Path, description = "Target user id")),
    responses(
        (status = 200, description = "The deleted user", body = UserResponse),
        (status = 403, description = "Operation failed", body = ErrorEnvelope)
    ),
    security(("bearerAuth" = []))
)]
pub async fn delete_user(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(user_id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .services
        .users
        .delete_user(&credentials, &user_id)
        .await
        .map_err(ApiError::forbidden)?;
    Ok(Json(UserResponse::from(user)))
}
