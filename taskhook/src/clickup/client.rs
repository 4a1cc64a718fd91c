//! Async HTTP client for the ClickUp v2 API.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};
use url::Url;

use super::types::WebhookRegistration;

/// Failures talking to ClickUp.
///
/// Response bodies are kept for logging; they are never shown to callers.
#[derive(Debug, Error)]
pub enum ClickUpError {
    #[error("invalid API base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("API base url cannot carry a path: {0}")]
    CannotBeABase(String),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {status}")]
    Status { status: u16, body: String },
}

/// ClickUp API client bound to one token.
#[derive(Clone)]
pub struct ClickUpClient {
    http: Client,
    base_url: Url,
    api_token: String,
    timeout: Duration,
}

impl ClickUpClient {
    /// Create a client sharing the given connection pool.
    pub fn new(
        http: Client,
        base_url: &str,
        api_token: &str,
        timeout: Duration,
    ) -> Result<Self, ClickUpError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ClickUpError::CannotBeABase(base_url.to_string()));
        }

        Ok(Self {
            http,
            base_url,
            api_token: api_token.to_string(),
            timeout,
        })
    }

    /// Build `{base}/list/{list_id}/{resource}` with the id escaped as one segment.
    fn list_url(&self, list_id: &str, resource: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("list").push(list_id).push(resource);
        }
        url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .timeout(self.timeout)
            .header("Authorization", self.api_token.as_str())
            .header("Content-Type", "application/json")
    }

    /// Fetch all tasks in a list (`GET /list/{list_id}/task`).
    pub async fn list_tasks(&self, list_id: &str) -> Result<Value, ClickUpError> {
        let url = self.list_url(list_id, "task");
        info!(list_id = list_id, "clickup_list_tasks_starting");

        let request = self.authorized(self.http.get(url));
        let body = self.send(request, "clickup_list_tasks").await?;

        let task_count = body.get("tasks").and_then(Value::as_array).map(Vec::len);
        info!(
            list_id = list_id,
            task_count = ?task_count,
            "clickup_list_tasks_complete"
        );

        Ok(body)
    }

    /// Register a webhook on a list (`POST /list/{list_id}/webhook`).
    pub async fn create_webhook(
        &self,
        list_id: &str,
        registration: &WebhookRegistration,
    ) -> Result<Value, ClickUpError> {
        let url = self.list_url(list_id, "webhook");
        info!(
            list_id = list_id,
            endpoint = %registration.endpoint,
            event_count = registration.events.len(),
            "clickup_create_webhook_starting"
        );

        let request = self.authorized(self.http.post(url)).json(registration);
        self.send(request, "clickup_create_webhook").await
    }

    async fn send(&self, request: RequestBuilder, operation: &str) -> Result<Value, ClickUpError> {
        let response = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                if e.is_timeout() {
                    error!(
                        operation = operation,
                        timeout_seconds = self.timeout.as_secs_f64(),
                        error = %e,
                        "clickup_request_timeout"
                    );
                } else {
                    error!(operation = operation, error = %e, "clickup_request_error");
                }
                return Err(e.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                operation = operation,
                status_code = status.as_u16(),
                response_body = %body,
                "clickup_unexpected_status"
            );
            return Err(ClickUpError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<Value>().await.map_err(|e| {
            error!(operation = operation, error = %e, "clickup_response_decode_error");
            ClickUpError::Request(e)
        })
    }
}
