//! Access policy gating operations on user records.
//!
//! Every operation that targets an existing user consults the policy with
//! the caller's credentials and the target record. The policy is chosen by
//! configuration: `self-only` restricts callers to their own record, while
//! `permissive` reproduces the historical allow-everything behaviour for
//! deployments that depend on it.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Credentials, User};

/// Outcome of an access decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Deny(String),
}

/// Policy deciding whether a caller may act on a target user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AccessPolicy {
    /// Callers may only act on their own record.
    #[default]
    SelfOnly,
    /// Any authenticated caller may act on any record.
    Permissive,
}

impl AccessPolicy {
    /// Evaluates the policy for a caller and target record.
    pub fn decide(&self, credentials: &Credentials, user: &User) -> AccessDecision {
        match self {
            AccessPolicy::Permissive => AccessDecision::Allow,
            AccessPolicy::SelfOnly => {
                if credentials.user_id == user.id {
                    AccessDecision::Allow
                } else {
                    AccessDecision::Deny(
                        "You are not allowed to act on another user's account.".to_string(),
                    )
                }
            }
        }
    }

    /// Evaluates the policy, converting a denial into an error.
    pub fn authorize(&self, credentials: &Credentials, user: &User) -> AppResult<()> {
        match self.decide(credentials, user) {
            AccessDecision::Allow => Ok(()),
            AccessDecision::Deny(reason) => Err(AppError::access_denied(reason)),
        }
    }
}
