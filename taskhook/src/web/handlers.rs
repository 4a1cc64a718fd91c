//! HTTP endpoint handlers.
//!
//! Each handler is self-contained: failures are classified into
//! [`AppError`] and turned into a response at this boundary.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Json,
};
use reqwest::Client;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::clickup::ClickUpClient;
use crate::error::AppError;
use crate::event::{log_event, EventSummary};
use crate::tasks::{sample_tasks, SampleTask};
use crate::web::signature::{validate_webhook_signature, SIGNATURE_HEADER};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config, http: Client) -> Self {
        Self {
            config: Arc::new(config),
            http,
        }
    }
}

/// Status/message response body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Service banner.
#[derive(Serialize)]
pub struct IndexResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub webhook_endpoint: &'static str,
}

/// Root endpoint, pointing callers at the webhook route.
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        status: "ok",
        message: "ClickUp webhook server is running",
        webhook_endpoint: "/webhook_listener",
    })
}

// =============================================================================
// Webhook Listener
// =============================================================================

/// ClickUp webhook endpoint.
///
/// This endpoint:
/// 1. Requires a configured webhook secret (500 otherwise)
/// 2. Verifies `X-Signature` against the raw body (401 on mismatch)
/// 3. Parses the body as a JSON object (500 if that fails)
/// 4. Logs the event summary and full payload
pub async fn webhook_listener(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<StatusResponse>, AppError> {
    let secret = state.config.require_webhook_secret()?;

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    info!(
        body_length = body.len(),
        has_signature = !signature.is_empty(),
        "webhook_received"
    );

    if !validate_webhook_signature(&body, signature, secret.as_bytes()) {
        warn!(body_length = body.len(), "webhook_signature_invalid");
        return Err(AppError::Authentication);
    }

    let payload: Map<String, Value> = serde_json::from_slice(&body)?;

    let summary = EventSummary::from_payload(&payload);
    log_event(&summary, &payload);

    Ok(Json(StatusResponse {
        status: "success",
        message: "Webhook received",
    }))
}

// =============================================================================
// Initial Sync
// =============================================================================

/// Initial sync response.
#[derive(Debug, Serialize)]
pub struct SyncResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub task_count: usize,
}

/// Fetch every task in the configured ClickUp list and log it.
pub async fn initial_sync(State(state): State<AppState>) -> Result<Json<SyncResponse>, AppError> {
    let config = &state.config;
    let api_token = config.require_api_token()?;
    let list_id = config.require_list_id()?;

    let client = ClickUpClient::new(
        state.http.clone(),
        &config.api_base_url,
        api_token,
        Duration::from_millis(config.request_timeout_ms),
    )
    .map_err(|e| {
        error!(error = %e, "clickup_base_url_invalid");
        AppError::InvalidSetting("API base URL")
    })?;

    info!(list_id = list_id, "initial_sync_starting");

    let tasks = client.list_tasks(list_id).await?;

    let task_count = tasks
        .get("tasks")
        .and_then(Value::as_array)
        .map(Vec::len)
        .unwrap_or(0);

    let full = serde_json::to_string_pretty(&tasks).unwrap_or_default();
    info!(
        list_id = list_id,
        task_count = task_count,
        tasks = %full,
        "initial_sync_complete"
    );

    Ok(Json(SyncResponse {
        status: "success",
        message: "Initial sync complete",
        task_count,
    }))
}

// =============================================================================
// Frontend Task API
// =============================================================================

/// Task list response.
#[derive(Debug, Serialize)]
pub struct TasksResponse {
    pub tasks: Vec<SampleTask>,
}

/// Static task list for the frontend.
pub async fn get_tasks() -> Json<TasksResponse> {
    info!("api_tasks_requested");
    Json(TasksResponse {
        tasks: sample_tasks(),
    })
}
