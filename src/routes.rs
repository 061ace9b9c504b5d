//! Route tables: one function per route group, plus the assembled application
//! router used by the server binary and the integration tests.

use crate::handlers::{fruit, greeting, person};
use crate::state::AppState;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes (no state): GET /health, GET /version.
pub fn common_routes() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
}

/// Greeting routes (no state): GET /hello, GET /greeting/:name.
pub fn greeting_routes() -> Router {
    Router::new()
        .route("/hello", get(greeting::hello))
        .route("/greeting/:name", get(greeting::greet))
}

/// Fruit resource routes. Static segments (`color`, `name`, `id`) take
/// precedence over the `/fruits/:id` capture.
pub fn fruit_routes(state: AppState) -> Router {
    Router::new()
        .route("/fruits", get(fruit::find_all))
        .route("/fruits/color/:color", get(fruit::find_by_color))
        .route("/fruits/name/:name/color/:color", post(fruit::create))
        .route("/fruits/:id", delete(fruit::delete))
        .route("/fruits/id/:id/color/:color", put(fruit::change_color))
        .with_state(state)
}

/// Person resource routes.
pub fn person_routes(state: AppState) -> Router {
    Router::new()
        .route("/person", get(person::find_all).post(person::create))
        .route("/person/:id", get(person::find_by_id))
        .with_state(state)
}

/// The full application router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes())
        .merge(greeting_routes())
        .merge(fruit_routes(state.clone()))
        .merge(person_routes(state))
        .layer(TraceLayer::new_for_http())
}
