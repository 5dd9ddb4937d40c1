//! Shared test support: an in-memory persistence collaborator and helpers
//! for driving the router directly.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use tower::util::ServiceExt;
use uuid::Uuid;

use roster_rs::api::routes::create_router;
use roster_rs::config::JwtConfig;
use roster_rs::error::{AppError, AppResult};
use roster_rs::models::{NewUser, UpdateUser, User};
use roster_rs::repositories::UserRepository;
use roster_rs::services::AccessPolicy;
use roster_rs::state::AppState;

pub const TEST_SECRET: &str = "integration_test_secret_key_32_chars";

/// In-memory stand-in for the Postgres repository.
///
/// Tracks how many store operations ran so tests can assert that rejected
/// requests never reached the persistence layer.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Uuid, User>>,
    calls: AtomicUsize,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn stored_password(&self, user_id: Uuid) -> Option<String> {
        self.users
            .lock()
            .unwrap()
            .get(&user_id)
            .map(|u| u.password.clone())
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, user_id: Uuid) -> AppResult<User> {
        self.record_call();
        self.users
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("user", "id", user_id))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        self.record_call();
        Ok(self.users.lock().unwrap().values().cloned().collect())
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        self.record_call();
        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            birth_year: new_user.birth_year,
            favorite_color: new_user.favorite_color,
            password: new_user.password,
        };
        self.users.lock().unwrap().insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user_id: Uuid, update: UpdateUser) -> AppResult<User> {
        self.record_call();
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found("user", "id", user_id))?;

        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(first_name) = update.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(birth_year) = update.birth_year {
            user.birth_year = Some(birth_year);
        }
        if let Some(favorite_color) = update.favorite_color {
            user.favorite_color = Some(favorite_color);
        }

        Ok(user.clone())
    }

    async fn delete_by_id(&self, user_id: Uuid) -> AppResult<User> {
        self.record_call();
        self.users
            .lock()
            .unwrap()
            .remove(&user_id)
            .ok_or_else(|| AppError::not_found("user", "id", user_id))
    }

    async fn change_password(&self, user_id: Uuid, password_hash: String) -> AppResult<User> {
        self.record_call();
        let mut users = self.users.lock().unwrap();
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::not_found("user", "id", user_id))?;
        user.password = password_hash;
        Ok(user.clone())
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        self.record_call();
        Ok(self
            .users
            .lock()
            .unwrap()
            .values()
            .any(|u| u.email == email))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Router plus a handle on the in-memory store for direct inspection.
pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryUserRepository>,
}

pub fn test_app(policy: AccessPolicy) -> TestApp {
    let repo = Arc::new(InMemoryUserRepository::new());
    let store: Arc<dyn UserRepository> = repo.clone();
    let jwt = JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiration: 1,
    };
    let state = AppState::new(store, jwt, policy);
    TestApp {
        router: create_router(state),
        repo,
    }
}

/// Sends a request and returns the status plus the parsed JSON body.
pub async fn send_json(
    router: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Creates a user through the public create endpoint and returns its
/// session token and sanitized record.
pub async fn create_user_via_api(
    router: &Router,
    username: &str,
    email: &str,
    password: &str,
) -> (String, serde_json::Value) {
    let (status, body) = send_json(
        router,
        Method::POST,
        "/user",
        None,
        Some(serde_json::json!({
            "username": username,
            "firstName": "Test",
            "lastName": "User",
            "email": email,
            "password": password,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "create failed: {}", body);
    let token = body["auth_token"].as_str().expect("token missing").to_string();
    (token, body["user"].clone())
}

/// Asserts the uniform error envelope shape.
pub fn assert_error_envelope(body: &serde_json::Value) {
    assert_eq!(body["status"], "error");
    assert!(body["error"].is_string());
}
