use diesel::prelude::*;
use uuid::Uuid;

/// User model for reading from the database.
///
/// The `password` column holds an argon2 PHC hash, never a plain password.
/// This type deliberately does not derive `Serialize`; everything that goes
/// on the wire passes through the allow-listed response DTO instead.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_year: Option<i32>,
    pub favorite_color: Option<String>,
    pub password: String,
}

/// NewUser model for inserting new records.
///
/// `password` is expected to already be hashed by the service layer.
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birth_year: Option<i32>,
    pub favorite_color: Option<String>,
    pub password: String,
}

/// UpdateUser model for partial updates; `None` fields are left untouched.
///
/// The password is intentionally absent — it is only replaced through the
/// change-password operation.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::users)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birth_year: Option<i32>,
    pub favorite_color: Option<String>,
}

impl UpdateUser {
    /// True when no field is supplied; diesel rejects an empty changeset, so
    /// callers short-circuit to the unmodified record instead.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.birth_year.is_none()
            && self.favorite_color.is_none()
    }
}
