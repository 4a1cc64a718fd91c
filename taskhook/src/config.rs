//! Configuration module for environment variable parsing.
//!
//! Everything is read once at startup. Handlers receive the resulting
//! [`Config`] through shared state and never touch the environment.

use std::env;
use tracing::warn;

use crate::error::AppError;

/// Default ClickUp REST API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.clickup.com/api/v2";

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Shared secret ClickUp uses to sign webhook bodies
    pub webhook_secret: Option<String>,

    /// ClickUp personal API token
    pub api_token: Option<String>,

    /// ClickUp list whose tasks are synced and watched
    pub list_id: Option<String>,

    /// ClickUp API base URL (overridable for testing)
    pub api_base_url: String,

    /// HTTP request timeout in milliseconds for outbound calls
    pub request_timeout_ms: u64,

    /// Public URL of this server's webhook endpoint, used for registration
    pub webhook_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),

            webhook_secret: parse_optional("CLICKUP_WEBHOOK_SECRET"),

            api_token: parse_optional("CLICKUP_API_TOKEN"),

            list_id: parse_optional("CLICKUP_LIST_ID"),

            api_base_url: parse_optional("CLICKUP_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10_000),

            webhook_url: parse_optional("WEBHOOK_URL"),
        }
    }

    /// The webhook secret, or a configuration error if it is unset.
    pub fn require_webhook_secret(&self) -> Result<&str, AppError> {
        self.webhook_secret
            .as_deref()
            .ok_or(AppError::Configuration("Webhook secret"))
    }

    /// The ClickUp API token, or a configuration error if it is unset.
    pub fn require_api_token(&self) -> Result<&str, AppError> {
        self.api_token
            .as_deref()
            .ok_or(AppError::Configuration("API token"))
    }

    /// The ClickUp list id, or a configuration error if it is unset.
    pub fn require_list_id(&self) -> Result<&str, AppError> {
        self.list_id
            .as_deref()
            .ok_or(AppError::Configuration("List ID"))
    }
}

// Debug reports secret presence only.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("webhook_secret_set", &self.webhook_secret.is_some())
            .field("api_token_set", &self.api_token.is_some())
            .field("list_id", &self.list_id)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("webhook_url", &self.webhook_url)
            .finish()
    }
}

/// Read an optional variable, treating blank values as unset.
fn parse_optional(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => Some(raw),
        Ok(_) => {
            warn!(env_var = name, "Blank value, treating as unset");
            None
        }
        Err(_) => None,
    }
}
