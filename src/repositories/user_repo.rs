//! Postgres-backed user repository using diesel_async.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::pooled_connection::bb8::PooledConnection;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use uuid::Uuid;

use crate::db::AsyncDbPool;
use crate::error::{AppError, AppResult};
use crate::models::{NewUser, UpdateUser, User};
use crate::repositories::UserRepository;

/// User repository holding an async connection pool.
///
/// `AsyncDbPool` (bb8::Pool) uses `Arc` internally, so cloning is cheap.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: AsyncDbPool,
}

impl PgUserRepository {
    /// Creates a new repository with the given connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> AppResult<PooledConnection<'_, AsyncPgConnection>> {
        self.pool.get().await.map_err(|e| AppError::ConnectionPool {
            source: anyhow::Error::new(e),
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> AppResult<User> {
        use crate::schema::users::dsl::*;
        let mut conn = self.conn().await?;

        users
            .filter(id.eq(user_id))
            .select(User::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|e| AppError::database("load user", e))?
            .ok_or_else(|| AppError::not_found("user", "id", user_id))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        use crate::schema::users::dsl::*;
        let mut conn = self.conn().await?;

        users
            .select(User::as_select())
            .load(&mut conn)
            .await
            .map_err(|e| AppError::database("list users", e))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        use crate::schema::users::dsl::*;
        let mut conn = self.conn().await?;

        diesel::insert_into(users)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|e| AppError::database("insert user", e))
    }

    async fn update(&self, user_id: Uuid, update: UpdateUser) -> AppResult<User> {
        use crate::schema::users::dsl::*;
        let mut conn = self.conn().await?;

        diesel::update(users.filter(id.eq(user_id)))
            .set(&update)
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| AppError::database("update user", e))?
            .ok_or_else(|| AppError::not_found("user", "id", user_id))
    }

    async fn delete_by_id(&self, user_id: Uuid) -> AppResult<User> {
        use crate::schema::users::dsl::*;
        let mut conn = self.conn().await?;

        diesel::delete(users.filter(id.eq(user_id)))
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| AppError::database("delete user", e))?
            .ok_or_else(|| AppError::not_found("user", "id", user_id))
    }

    async fn change_password(&self, user_id: Uuid, password_hash: String) -> AppResult<User> {
        use crate::schema::users::dsl::*;
        let mut conn = self.conn().await?;

        diesel::update(users.filter(id.eq(user_id)))
            .set(password.eq(password_hash))
            .returning(User::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|e| AppError::database("change password", e))?
            .ok_or_else(|| AppError::not_found("user", "id", user_id))
    }

    async fn email_exists(&self, user_email: &str) -> AppResult<bool> {
        use crate::schema::users::dsl::*;
        let mut conn = self.conn().await?;

        diesel::select(diesel::dsl::exists(users.filter(email.eq(user_email))))
            .get_result(&mut conn)
            .await
            .map_err(|e| AppError::database("check email existence", e))
    }

    async fn ping(&self) -> AppResult<()> {
        let mut conn = self.conn().await?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map_err(|e| AppError::database("ping", e))?;
        Ok(())
    }
}
