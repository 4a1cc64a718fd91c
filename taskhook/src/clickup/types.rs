//! ClickUp API payload types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event types subscribed to when registering the webhook.
pub const EVENT_TYPES: &[&str] = &[
    "taskCreated",
    "taskUpdated",
    "taskDeleted",
    "taskStatusUpdated",
    "taskAssigneeUpdated",
    "taskDueDateUpdated",
    "taskCommentPosted",
    "taskCommentUpdated",
    "taskPriorityUpdated",
    "taskTimeTracked",
];

/// Body of `POST /list/{list_id}/webhook`.
///
/// `task_id`, `space_id` and `folder_id` stay null so the webhook covers
/// every task in the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRegistration {
    /// Public URL ClickUp will deliver to
    pub endpoint: String,
    /// ClickUp expects the API token in this field
    pub client_id: String,
    /// Subscribed event types
    pub events: Vec<String>,
    pub task_id: Option<String>,
    pub space_id: Option<String>,
    pub folder_id: Option<String>,
    pub list_id: String,
    pub health: WebhookHealth,
}

/// Initial health block sent with a registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookHealth {
    pub status: String,
    pub fail_count: u32,
}

impl WebhookRegistration {
    /// Registration for all [`EVENT_TYPES`] on one list.
    pub fn for_list(endpoint: &str, api_token: &str, list_id: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client_id: api_token.to_string(),
            events: EVENT_TYPES.iter().map(|e| e.to_string()).collect(),
            task_id: None,
            space_id: None,
            folder_id: None,
            list_id: list_id.to_string(),
            health: WebhookHealth {
                status: "active".to_string(),
                fail_count: 0,
            },
        }
    }
}

/// Extract the created webhook's id from a registration response.
///
/// ClickUp nests it under `webhook.id`; older responses put it at the top level.
pub fn webhook_id(response: &Value) -> Option<&str> {
    response
        .pointer("/webhook/id")
        .and_then(Value::as_str)
        .or_else(|| response.get("id").and_then(Value::as_str))
}

/// Extract the signing secret ClickUp generated for a new webhook.
pub fn webhook_secret(response: &Value) -> Option<&str> {
    response
        .pointer("/webhook/secret")
        .and_then(Value::as_str)
        .or_else(|| response.get("secret").and_then(Value::as_str))
}
