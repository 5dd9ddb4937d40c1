//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between the
//! persistence collaborator and the HTTP handlers.

mod access;
mod user_service;

pub use access::{AccessDecision, AccessPolicy};
pub use user_service::UserService;

use std::sync::Arc;

use crate::repositories::UserRepository;

/// Aggregates all services for convenient access from handlers.
#[derive(Clone)]
pub struct Services {
    pub users: UserService,
}

impl Services {
    /// Creates the service set from the persistence collaborator and the
    /// configured access policy.
    pub fn new(repo: Arc<dyn UserRepository>, policy: AccessPolicy) -> Self {
        Self {
            users: UserService::new(repo, policy),
        }
    }
}
