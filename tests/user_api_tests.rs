//! Integration tests for the user CRUD endpoints, driving the router
//! end-to-end against an in-memory store.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{assert_error_envelope, create_user_via_api, send_json, test_app};
use roster_rs::services::AccessPolicy;

#[tokio::test]
async fn test_create_returns_token_and_sanitized_user() {
    let app = test_app(AccessPolicy::SelfOnly);

    let (status, body) = send_json(
        &app.router,
        Method::POST,
        "/user",
        None,
        Some(json!({
            "username": "a",
            "firstName": "A",
            "lastName": "B",
            "email": "a@x.com",
            "password": "p1",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["auth_token"].is_string());
    assert!(!body["auth_token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["email"], "a@x.com");
    assert_eq!(body["user"]["username"], "a");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_create_with_optional_fields() {
    let app = test_app(AccessPolicy::SelfOnly);

    let (status, body) = send_json(
        &app.router,
        Method::POST,
        "/user",
        None,
        Some(json!({
            "username": "ada",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@x.com",
            "password": "secret",
            "birthYear": 1815,
            "favoriteColor": "teal",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["birthYear"], 1815);
    assert_eq!(body["user"]["favoriteColor"], "teal");
}

#[tokio::test]
async fn test_create_duplicate_email_rejected() {
    let app = test_app(AccessPolicy::SelfOnly);
    create_user_via_api(&app.router, "first", "dup@x.com", "pw-one").await;

    let (status, body) = send_json(
        &app.router,
        Method::POST,
        "/user",
        None,
        Some(json!({
            "username": "second",
            "firstName": "Second",
            "lastName": "User",
            "email": "dup@x.com",
            "password": "pw-two",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body);
    assert_eq!(body["error"], "A user already exists with that email.");
}

#[tokio::test]
async fn test_create_missing_field_rejected_before_handler() {
    let app = test_app(AccessPolicy::SelfOnly);

    let (status, body) = send_json(
        &app.router,
        Method::POST,
        "/user",
        None,
        Some(json!({
            "username": "a",
            "firstName": "A",
            "lastName": "B",
            "email": "a@x.com",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body);
    assert_eq!(app.repo.call_count(), 0);
}

#[tokio::test]
async fn test_create_empty_required_string_rejected() {
    let app = test_app(AccessPolicy::SelfOnly);

    let (status, body) = send_json(
        &app.router,
        Method::POST,
        "/user",
        None,
        Some(json!({
            "username": "",
            "firstName": "A",
            "lastName": "B",
            "email": "a@x.com",
            "password": "p1",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body);
}

#[tokio::test]
async fn test_get_returns_user_without_password() {
    let app = test_app(AccessPolicy::SelfOnly);
    let (token, user) = create_user_via_api(&app.router, "reader", "reader@x.com", "pw").await;
    let user_id = user["id"].as_str().unwrap();

    let (status, body) = send_json(
        &app.router,
        Method::GET,
        &format!("/user/{}", user_id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], user["id"]);
    assert_eq!(body["email"], "reader@x.com");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_get_nonexistent_user_forbidden() {
    let app = test_app(AccessPolicy::SelfOnly);
    let (token, _) = create_user_via_api(&app.router, "reader", "reader@x.com", "pw").await;

    let (status, body) = send_json(
        &app.router,
        Method::GET,
        &format!("/user/{}", uuid::Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_envelope(&body);
}

#[tokio::test]
async fn test_get_malformed_user_id_forbidden() {
    let app = test_app(AccessPolicy::SelfOnly);
    let (token, _) = create_user_via_api(&app.router, "reader", "reader@x.com", "pw").await;

    let (status, body) = send_json(
        &app.router,
        Method::GET,
        "/user/not-an-id",
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_envelope(&body);
}

#[tokio::test]
async fn test_update_partial_merges_fields() {
    let app = test_app(AccessPolicy::SelfOnly);

    let (status, created) = send_json(
        &app.router,
        Method::POST,
        "/user",
        None,
        Some(json!({
            "username": "upd",
            "firstName": "Up",
            "lastName": "Date",
            "email": "upd@x.com",
            "password": "pw",
            "birthYear": 1990,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = created["auth_token"].as_str().unwrap().to_string();
    let user_id = created["user"]["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app.router,
        Method::PUT,
        &format!("/user/{}", user_id),
        Some(&token),
        Some(json!({"favoriteColor": "blue"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["favoriteColor"], "blue");
    // Unsupplied fields retain their prior values
    assert_eq!(body["username"], "upd");
    assert_eq!(body["birthYear"], 1990);
    assert_eq!(body["email"], "upd@x.com");
}

#[tokio::test]
async fn test_update_empty_body_returns_record_unchanged() {
    let app = test_app(AccessPolicy::SelfOnly);
    let (token, user) = create_user_via_api(&app.router, "same", "same@x.com", "pw").await;
    let user_id = user["id"].as_str().unwrap();

    let (status, body) = send_json(
        &app.router,
        Method::PUT,
        &format!("/user/{}", user_id),
        Some(&token),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "same");
}

#[tokio::test]
async fn test_update_nonexistent_user_forbidden() {
    let app = test_app(AccessPolicy::SelfOnly);
    let (token, _) = create_user_via_api(&app.router, "upd", "upd@x.com", "pw").await;

    let (status, body) = send_json(
        &app.router,
        Method::PUT,
        &format!("/user/{}", uuid::Uuid::new_v4()),
        Some(&token),
        Some(json!({"favoriteColor": "blue"})),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_envelope(&body);
}

#[tokio::test]
async fn test_delete_returns_record_and_removes_it() {
    let app = test_app(AccessPolicy::SelfOnly);
    let (token, user) = create_user_via_api(&app.router, "gone", "gone@x.com", "pw").await;
    let user_id = user["id"].as_str().unwrap().to_string();

    let (status, body) = send_json(
        &app.router,
        Method::DELETE,
        &format!("/user/{}", user_id),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // The pre-deletion record comes back as confirmation
    assert_eq!(body["id"], user["id"]);
    assert_eq!(body["email"], "gone@x.com");
    assert!(body.get("password").is_none());

    let (status, body) = send_json(
        &app.router,
        Method::GET,
        &format!("/user/{}", user_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_envelope(&body);
}

#[tokio::test]
async fn test_delete_nonexistent_user_forbidden() {
    let app = test_app(AccessPolicy::SelfOnly);
    let (token, _) = create_user_via_api(&app.router, "del", "del@x.com", "pw").await;

    let (status, body) = send_json(
        &app.router,
        Method::DELETE,
        &format!("/user/{}", uuid::Uuid::new_v4()),
        Some(&token),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_envelope(&body);
}

#[tokio::test]
async fn test_list_returns_all_users_without_passwords() {
    let app = test_app(AccessPolicy::Permissive);
    let (token, _) = create_user_via_api(&app.router, "one", "one@x.com", "pw").await;
    create_user_via_api(&app.router, "two", "two@x.com", "pw").await;

    let (status, body) = send_json(&app.router, Method::GET, "/user", Some(&token), None).await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().expect("expected an array");
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user["email"].is_string());
    }
}
