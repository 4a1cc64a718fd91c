//! Field extraction and logging for ClickUp webhook events.

use serde_json::{Map, Value};
use tracing::info;

/// Maximum characters of comment text included in logs.
const COMMENT_PREVIEW_CHARS: usize = 100;

/// Placeholder for fields the payload did not carry.
const UNKNOWN: &str = "unknown";

/// Summary of the task attached to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub assignees: Vec<String>,
}

/// Summary of the comment attached to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDetails {
    pub id: Option<String>,
    pub author: Option<String>,
    pub text: Option<String>,
}

/// One entry of the event's change history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub user: Option<String>,
    pub field: Option<String>,
}

/// Fields extracted from a webhook payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSummary {
    pub event_type: String,
    pub task_id: String,
    pub task: Option<TaskDetails>,
    pub comment: Option<CommentDetails>,
    pub history: Vec<HistoryEntry>,
}

impl EventSummary {
    /// Extract a summary from a parsed payload.
    ///
    /// Event type is looked up in `event.type`, then `event` (when it is a
    /// string), then `event_type`. Task id is looked up in `event.task_id`,
    /// then `task_id`, then `task.id`. Missing values become `"unknown"`.
    pub fn from_payload(payload: &Map<String, Value>) -> Self {
        let event = payload.get("event");

        let event_type = event
            .and_then(|e| e.get("type"))
            .and_then(scalar_string)
            .or_else(|| event.and_then(Value::as_str).map(str::to_string))
            .or_else(|| payload.get("event_type").and_then(scalar_string))
            .unwrap_or_else(|| UNKNOWN.to_string());

        let task = payload
            .get("task")
            .filter(|t| t.is_object())
            .map(TaskDetails::from_value);

        let task_id = event
            .and_then(|e| e.get("task_id"))
            .and_then(scalar_string)
            .or_else(|| payload.get("task_id").and_then(scalar_string))
            .or_else(|| task.as_ref().and_then(|t| t.id.clone()))
            .unwrap_or_else(|| UNKNOWN.to_string());

        let comment = payload
            .get("comment")
            .filter(|c| c.is_object())
            .map(CommentDetails::from_value);

        let history = payload
            .get("history_items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(HistoryEntry::from_value).collect())
            .unwrap_or_default();

        Self {
            event_type,
            task_id,
            task,
            comment,
            history,
        }
    }
}

impl TaskDetails {
    fn from_value(task: &Value) -> Self {
        let assignees = task
            .get("assignees")
            .and_then(Value::as_array)
            .map(|list| {
                list.iter()
                    .filter_map(|a| a.get("username").and_then(scalar_string))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: task.get("id").and_then(scalar_string),
            name: task.get("name").and_then(scalar_string),
            status: task.pointer("/status/status").and_then(scalar_string),
            assignees,
        }
    }
}

impl CommentDetails {
    fn from_value(comment: &Value) -> Self {
        Self {
            id: comment.get("id").and_then(scalar_string),
            author: comment.pointer("/user/username").and_then(scalar_string),
            text: comment.get("comment_text").and_then(scalar_string),
        }
    }

    /// Comment text cut to the log preview length.
    pub fn preview(&self) -> Option<String> {
        self.text.as_ref().map(|text| {
            if text.chars().count() > COMMENT_PREVIEW_CHARS {
                let cut: String = text.chars().take(COMMENT_PREVIEW_CHARS).collect();
                format!("{}...", cut)
            } else {
                text.clone()
            }
        })
    }
}

impl HistoryEntry {
    fn from_value(item: &Value) -> Self {
        Self {
            user: item.pointer("/user/username").and_then(scalar_string),
            field: item.get("field").and_then(scalar_string),
        }
    }
}

/// ClickUp ids arrive as strings or numbers depending on the endpoint.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Human-readable label for an event type.
pub fn event_label(event_type: &str) -> &str {
    match event_type {
        "taskCreated" => "Task Created",
        "taskUpdated" => "Task Updated",
        "taskDeleted" => "Task Deleted",
        "taskStatusUpdated" => "Task Status Changed",
        "taskAssigneeUpdated" => "Task Assignee Changed",
        "taskDueDateUpdated" => "Task Due Date Changed",
        "taskCommentPosted" => "Task Comment Posted",
        "taskCommentUpdated" => "Task Comment Updated",
        "taskTimeTracked" => "Time Tracked",
        "taskPriorityUpdated" => "Task Priority Changed",
        other => other,
    }
}

/// Log a summarized event followed by the full payload.
pub fn log_event(summary: &EventSummary, payload: &Map<String, Value>) {
    info!(
        event_type = %summary.event_type,
        event_label = event_label(&summary.event_type),
        task_id = %summary.task_id,
        "webhook_event_received"
    );

    if let Some(task) = &summary.task {
        info!(
            task_id = ?task.id,
            task_name = ?task.name,
            task_status = ?task.status,
            assignees = %task.assignees.join(", "),
            "webhook_event_task"
        );
    }

    if let Some(comment) = &summary.comment {
        info!(
            comment_id = ?comment.id,
            comment_author = comment.author.as_deref().unwrap_or("Unknown"),
            comment_preview = ?comment.preview(),
            "webhook_event_comment"
        );
    }

    for (idx, item) in summary.history.iter().enumerate() {
        info!(
            index = idx + 1,
            user = item.user.as_deref().unwrap_or("System"),
            field = item.field.as_deref().unwrap_or("Unknown field"),
            "webhook_event_history_item"
        );
    }

    let full = serde_json::to_string_pretty(payload).unwrap_or_default();
    info!(payload = %full, "webhook_event_payload");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected JSON object"),
        }
    }

    #[test]
    fn test_summary_nested_event() {
        let payload = as_map(json!({
            "event": {"type": "taskStatusUpdated", "task_id": "86a1b2c3d"}
        }));

        let summary = EventSummary::from_payload(&payload);

        assert_eq!(summary.event_type, "taskStatusUpdated");
        assert_eq!(summary.task_id, "86a1b2c3d");
        assert!(summary.task.is_none());
        assert!(summary.history.is_empty());
    }

    #[test]
    fn test_summary_flat_clickup_payload() {
        let payload = as_map(json!({
            "event": "taskCommentPosted",
            "task_id": "86a1b2c3d",
            "webhook_id": "7fa3ec74",
            "history_items": [
                {"field": "comment", "user": {"username": "Ada"}},
                {"field": "status"}
            ],
            "comment": {
                "id": 90120011,
                "user": {"username": "Ada"},
                "comment_text": "Looks good"
            }
        }));

        let summary = EventSummary::from_payload(&payload);

        assert_eq!(summary.event_type, "taskCommentPosted");
        assert_eq!(summary.task_id, "86a1b2c3d");
        assert_eq!(summary.history.len(), 2);
        assert_eq!(summary.history[0].user.as_deref(), Some("Ada"));
        assert_eq!(summary.history[1].user, None);
        assert_eq!(summary.history[1].field.as_deref(), Some("status"));

        let comment = summary.comment.unwrap();
        assert_eq!(comment.id.as_deref(), Some("90120011"));
        assert_eq!(comment.author.as_deref(), Some("Ada"));
    }

    #[test]
    fn test_summary_event_type_fallback() {
        let payload = as_map(json!({
            "event_type": "taskDeleted",
            "task": {
                "id": "abc",
                "name": "Old task",
                "status": {"status": "closed"},
                "assignees": [{"username": "Ada"}, {"username": "Grace"}, {"id": 3}]
            }
        }));

        let summary = EventSummary::from_payload(&payload);

        assert_eq!(summary.event_type, "taskDeleted");
        assert_eq!(summary.task_id, "abc");

        let task = summary.task.unwrap();
        assert_eq!(task.name.as_deref(), Some("Old task"));
        assert_eq!(task.status.as_deref(), Some("closed"));
        assert_eq!(task.assignees, vec!["Ada".to_string(), "Grace".to_string()]);
    }

    #[test]
    fn test_summary_empty_payload() {
        let summary = EventSummary::from_payload(&Map::new());

        assert_eq!(summary.event_type, "unknown");
        assert_eq!(summary.task_id, "unknown");
        assert!(summary.comment.is_none());
    }

    #[test]
    fn test_comment_preview_truncates() {
        let comment = CommentDetails {
            id: None,
            author: None,
            text: Some("x".repeat(150)),
        };
        let preview = comment.preview().unwrap();
        assert_eq!(preview.len(), 103);
        assert!(preview.ends_with("..."));

        let short = CommentDetails {
            id: None,
            author: None,
            text: Some("short".to_string()),
        };
        assert_eq!(short.preview().as_deref(), Some("short"));
    }

    #[test]
    fn test_event_label() {
        assert_eq!(event_label("taskCreated"), "Task Created");
        assert_eq!(event_label("taskTimeTracked"), "Time Tracked");
        assert_eq!(event_label("listCreated"), "listCreated");
    }
}
