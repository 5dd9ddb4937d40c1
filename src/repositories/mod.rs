//! Repository layer for data access operations.
//!
//! The persistence store is consumed through the `UserRepository` trait so
//! handlers and services never depend on a concrete backend. The production
//! implementation is Postgres-backed; tests substitute an in-memory store.

mod user_repo;

pub use user_repo::PgUserRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{NewUser, UpdateUser, User};

/// Narrow interface to the user persistence store.
///
/// Every lookup of a specific record fails with a not-found error rather
/// than returning an empty value, so callers surface a uniform failure.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Loads a user by id, failing when no record exists.
    async fn get_by_id(&self, user_id: Uuid) -> AppResult<User>;

    /// Loads every user record.
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Inserts a new user and returns the stored record.
    async fn create(&self, new_user: NewUser) -> AppResult<User>;

    /// Applies a partial update and returns the updated record.
    async fn update(&self, user_id: Uuid, update: UpdateUser) -> AppResult<User>;

    /// Deletes a user by id and returns the deleted record.
    async fn delete_by_id(&self, user_id: Uuid) -> AppResult<User>;

    /// Replaces the stored password hash and returns the updated record.
    async fn change_password(&self, user_id: Uuid, password_hash: String) -> AppResult<User>;

    /// Returns whether any record already uses the given email address.
    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// Verifies store connectivity for health probes.
    async fn ping(&self) -> AppResult<()>;
}
