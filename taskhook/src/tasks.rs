//! Sample task data served to the frontend.
//!
//! The records are fixed; they stand in for synced ClickUp data.

use serde::Serialize;

/// Task summary as returned by `GET /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleTask {
    /// Unique task identifier
    pub id: &'static str,
    /// Task title
    pub name: &'static str,
    /// Workflow status (`pending`, `in_progress` or `complete`)
    pub status: &'static str,
    /// Last modification time, RFC 3339 in UTC
    pub last_updated: &'static str,
}

const SAMPLE_TASKS: [SampleTask; 5] = [
    SampleTask {
        id: "task_001",
        name: "Design User Dashboard",
        status: "in_progress",
        last_updated: "2024-01-15T10:30:00Z",
    },
    SampleTask {
        id: "task_002",
        name: "Implement Authentication",
        status: "complete",
        last_updated: "2024-01-14T15:45:00Z",
    },
    SampleTask {
        id: "task_003",
        name: "Write API Documentation",
        status: "pending",
        last_updated: "2024-01-13T09:20:00Z",
    },
    SampleTask {
        id: "task_004",
        name: "Setup CI/CD Pipeline",
        status: "in_progress",
        last_updated: "2024-01-15T11:15:00Z",
    },
    SampleTask {
        id: "task_005",
        name: "Performance Testing",
        status: "pending",
        last_updated: "2024-01-12T14:00:00Z",
    },
];

/// The five sample tasks, in display order.
pub fn sample_tasks() -> Vec<SampleTask> {
    SAMPLE_TASKS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_tasks_count_and_ids() {
        let tasks = sample_tasks();
        assert_eq!(tasks.len(), 5);

        let ids: HashSet<_> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_sample_tasks_fields() {
        for task in sample_tasks() {
            assert!(!task.name.is_empty());
            assert!(["pending", "in_progress", "complete"].contains(&task.status));
            assert!(
                chrono::DateTime::parse_from_rfc3339(task.last_updated).is_ok(),
                "bad timestamp {}",
                task.last_updated
            );
        }
    }

    #[test]
    fn test_sample_tasks_timestamps_are_utc() {
        for task in sample_tasks() {
            let parsed = chrono::DateTime::parse_from_rfc3339(task.last_updated).unwrap();
            assert_eq!(parsed.offset().local_minus_utc(), 0);
        }
        assert!(chrono::DateTime::parse_from_rfc3339("2024-13-45T99:99:99Z").is_err());
    }

    #[test]
    fn test_sample_task_serialization() {
        let json = serde_json::to_value(&sample_tasks()[0]).unwrap();
        assert_eq!(json["id"], "task_001");
        assert_eq!(json["last_updated"], "2024-01-15T10:30:00Z");
    }
}
