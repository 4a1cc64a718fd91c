//! Taskhook - ClickUp webhook receiver and task API proxy.
//!
//! This library provides the shared modules for the two Taskhook binaries:
//! - `taskhook`: Web server that authenticates and logs ClickUp webhooks
//! - `taskhook-register`: One-shot tool that registers the webhook with ClickUp
//!
//! ## Architecture
//!
//! ```text
//! ClickUp → /webhook_listener → signature check → event summary → logs
//! Frontend → /api/tasks → static sample tasks
//! Operator → /initial_sync → ClickUp list tasks API → logs
//! ```

pub mod clickup;
pub mod config;
pub mod error;
pub mod event;
pub mod tasks;
pub mod web;

// Re-export commonly used types
pub use clickup::{ClickUpClient, ClickUpError, WebhookRegistration, EVENT_TYPES};
pub use config::Config;
pub use error::AppError;
pub use event::{log_event, EventSummary};
pub use tasks::{sample_tasks, SampleTask};
pub use web::{build_router, AppState};
