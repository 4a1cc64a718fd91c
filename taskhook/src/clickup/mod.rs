//! ClickUp REST API client.
//!
//! This module provides:
//! - Request/response types for the endpoints Taskhook uses
//! - A thin async client for listing tasks and registering webhooks
//!
//! Calls are plain passthroughs: no caching, pagination or retries.

pub mod client;
pub mod types;

pub use client::{ClickUpClient, ClickUpError};
pub use types::{webhook_id, webhook_secret, WebhookHealth, WebhookRegistration, EVENT_TYPES};
