//! Web server module.
//!
//! This module provides the HTTP surface:
//! - `POST /webhook_listener`: authenticated ClickUp webhook intake
//! - `GET /initial_sync`: one-shot fetch of the configured list's tasks
//! - `GET /api/tasks`: static task list for the frontend
//! - `GET /health` and `GET /`: liveness
//!
//! CORS is permissive so the frontend can call the API from any origin.

pub mod handlers;
pub mod signature;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use handlers::{
    get_tasks, health, index, initial_sync, webhook_listener, AppState, HealthResponse,
    IndexResponse, StatusResponse, SyncResponse, TasksResponse,
};
pub use signature::{sign_payload, validate_webhook_signature, SIGNATURE_HEADER};

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/webhook_listener", post(webhook_listener))
        .route("/initial_sync", get(initial_sync))
        .route("/api/tasks", get(get_tasks))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
