//! Webhook event inspection.
//!
//! Authenticated webhook bodies are summarized into the fields worth a log
//! line of their own, then logged in full. Nothing is stored.
//!
//! ```text
//! raw body → serde_json::Map → EventSummary::from_payload() → log_event()
//! ```

pub mod summary;

pub use summary::{
    event_label, log_event, CommentDetails, EventSummary, HistoryEntry, TaskDetails,
};
