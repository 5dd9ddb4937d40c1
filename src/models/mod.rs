mod credentials;
mod user;

pub use credentials::Credentials;
pub use user::{NewUser, UpdateUser, User};
