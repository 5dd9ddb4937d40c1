//! Non-CRUD user actions.

use axum::extract::State;
use axum::Json;

use crate::api::doc::ACTIONS_TAG;
use crate::api::dto::{ChangePasswordRequest, ErrorEnvelope, UserResponse};
use crate::error::ApiError;
use crate::models::Credentials;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// POST /actions/changePassword - Replace a user's password.
///
/// The current password must verify against the stored hash and both new
/// password fields must match exactly.
#[utoipa::path(
    post,
    path = "/actions/changePassword",
    tag = ACTIONS_TAG,
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "The updated user", body = UserResponse),
        (status = 403, description = "Operation failed", body = ErrorEnvelope)
    ),
    security(("bearerAuth" = []))
)]
pub async fn change_password(
    State(state): State<AppState>,
    credentials: Credentials,
    ValidatedJson(payload): ValidatedJson<ChangePasswordRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .services
        .users
        .change_password(
            &credentials,
            &payload.user_id,
            &payload.current_password,
            &payload.new_password,
            &payload.new_password_confirm,
        )
        .await
        .map_err(ApiError::forbidden)?;
    Ok(Json(UserResponse::from(user)))
}
