//! User-related DTOs for API requests and responses.
//!
//! Request bodies are camelCase on the wire and reject unknown fields, so
//! the declared shape in the route table is the whole accepted surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{NewUser, UpdateUser, User};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new user.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(format = "password")]
    pub password: String,
    pub birth_year: Option<i32>,
    pub favorite_color: Option<String>,
}

impl CreateUserRequest {
    /// Converts the request into the insertable model. The password is still
    /// plain here; the service hashes it before the store sees it.
    pub fn into_new_user(self) -> NewUser {
        NewUser {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            birth_year: self.birth_year,
            favorite_color: self.favorite_color,
            password: self.password,
        }
    }
}

/// Request body for updating a user; every field is optional and only the
/// supplied ones are merged. The password is not updatable on this path.
#[derive(Debug, Deserialize, ToSchema, Validate, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub last_name: Option<String>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub email: Option<String>,
    pub birth_year: Option<i32>,
    pub favorite_color: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_update_user(self) -> UpdateUser {
        UpdateUser {
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            birth_year: self.birth_year,
            favorite_color: self.favorite_color,
        }
    }
}

/// Request body for the change-password action.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub user_id: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(format = "password")]
    pub current_password: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(format = "password")]
    pub new_password: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    #[schema(format = "password")]
    pub new_password_confirm: String,
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for user data.
///
/// This is an allow-list: the password hash has no field here, so it cannot
/// reach the wire no matter what the stored record contains.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            birth_year: user.birth_year,
            favorite_color: user.favorite_color,
        }
    }
}

/// Response body for a successful create: the issued session token bundled
/// with the sanitized user record.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub auth_token: String,
    pub user: UserResponse,
}
