//! Application state for the Axum router.

use std::sync::Arc;

use crate::config::JwtConfig;
use crate::repositories::UserRepository;
use crate::services::{AccessPolicy, Services};

/// Shared state handed to every request handler.
///
/// The persistence and identity collaborators are injected at construction,
/// so tests can substitute an in-memory store.
#[derive(Clone)]
pub struct AppState {
    /// Business logic services
    pub services: Services,
    /// Persistence collaborator, kept for health probes
    pub repo: Arc<dyn UserRepository>,
    /// Session token configuration
    pub jwt: JwtConfig,
}

impl AppState {
    /// Creates the application state from its collaborators.
    pub fn new(repo: Arc<dyn UserRepository>, jwt: JwtConfig, policy: AccessPolicy) -> Self {
        let services = Services::new(repo.clone(), policy);
        Self {
            services,
            repo,
            jwt,
        }
    }
}
