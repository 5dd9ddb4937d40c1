//! Router configuration for the API.
//!
//! The route table is declared here in one place: method, path, handler,
//! and — through the extractors each handler declares — the auth
//! requirement and input shape. `POST /user` is the only unauthenticated
//! resource route.

use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers::{actions, health, users};
use crate::api::middleware::{logging_middleware, request_id_middleware};
use crate::state::AppState;

/// Creates the application router with all routes and middleware.
///
/// Middleware is applied in reverse order of declaration, so the request id
/// is assigned before the logging middleware runs.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/user", get(users::list_users).post(users::create_user))
        .route(
            "/user/{userId}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/actions/changePassword", post(actions::change_password))
        .merge(health::health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
