//! User service for business logic operations.
//!
//! Every operation that addresses an existing user follows the same
//! protocol: resolve the target id, fetch the record, run the access
//! policy, then perform the operation-specific work against the store.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Credentials, NewUser, UpdateUser, User};
use crate::repositories::UserRepository;
use crate::services::AccessPolicy;
use crate::utils::password::{hash_password, verify_password};

/// User service holding the persistence collaborator and access policy.
#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    policy: AccessPolicy,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, policy: AccessPolicy) -> Self {
        Self { repo, policy }
    }

    /// Resolves an opaque id string to a store key. An id that cannot be a
    /// valid key identifies no record, so it surfaces as not-found.
    fn parse_user_id(raw: &str) -> AppResult<Uuid> {
        Uuid::parse_str(raw).map_err(|_| AppError::not_found("user", "id", raw))
    }

    /// Fetches the target record and runs the access check.
    async fn fetch_authorized(&self, credentials: &Credentials, raw_id: &str) -> AppResult<User> {
        let user_id = Self::parse_user_id(raw_id)?;
        let user = self.repo.get_by_id(user_id).await?;
        self.policy.authorize(credentials, &user)?;
        Ok(user)
    }

    /// Returns the target user record.
    pub async fn get_user(&self, credentials: &Credentials, user_id: &str) -> AppResult<User> {
        self.fetch_authorized(credentials, user_id).await
    }

    /// Returns all user records.
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    /// Creates a new user, rejecting duplicate email addresses.
    ///
    /// The duplicate check is an existence query followed by an insert; a
    /// concurrent create with the same email can slip between the two.
    pub async fn create_user(&self, mut new_user: NewUser) -> AppResult<User> {
        if self.repo.email_exists(&new_user.email).await? {
            return Err(AppError::validation("A user already exists with that email."));
        }
        new_user.password = hash_password(&new_user.password)?;
        self.repo.create(new_user).await
    }

    /// Merges the supplied fields into the target record.
    pub async fn update_user(
        &self,
        credentials: &Credentials,
        user_id: &str,
        update: UpdateUser,
    ) -> AppResult<User> {
        let user = self.fetch_authorized(credentials, user_id).await?;
        if update.is_empty() {
            return Ok(user);
        }
        self.repo.update(user.id, update).await
    }

    /// Deletes the target record, returning it as confirmation.
    pub async fn delete_user(&self, credentials: &Credentials, user_id: &str) -> AppResult<User> {
        let user = self.fetch_authorized(credentials, user_id).await?;
        self.repo.delete_by_id(user.id).await
    }

    /// Replaces the target user's password after verifying the current one
    /// and the confirmation field.
    pub async fn change_password(
        &self,
        credentials: &Credentials,
        user_id: &str,
        current_password: &str,
        new_password: &str,
        new_password_confirm: &str,
    ) -> AppResult<User> {
        let user = self.fetch_authorized(credentials, user_id).await?;

        if !verify_password(current_password, &user.password)? {
            return Err(AppError::validation("Incorrect Password!"));
        }
        if new_password != new_password_confirm {
            return Err(AppError::validation("Passwords Must Match!"));
        }

        let password_hash = hash_password(new_password)?;
        self.repo.change_password(user.id, password_hash).await
    }
}
