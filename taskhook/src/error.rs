//! Request-level error taxonomy.
//!
//! Each variant maps to exactly one HTTP status and one generic,
//! caller-safe message. Details stay in the logs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::clickup::ClickUpError;

/// Errors a request handler can end with.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required setting (named by the payload) is missing.
    #[error("{0} not configured")]
    Configuration(&'static str),

    /// A setting (named by the payload) is present but unusable.
    #[error("{0} is invalid")]
    InvalidSetting(&'static str),

    /// The webhook signature did not match the body.
    #[error("invalid webhook signature")]
    Authentication,

    /// The ClickUp API call failed or returned a non-success status.
    #[error("upstream request failed: {0}")]
    Upstream(#[from] ClickUpError),

    /// The authenticated body was not a JSON object.
    #[error("malformed webhook payload: {0}")]
    MalformedInput(#[from] serde_json::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Authentication => StatusCode::UNAUTHORIZED,
            AppError::Configuration(_)
            | AppError::InvalidSetting(_)
            | AppError::Upstream(_)
            | AppError::MalformedInput(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Configuration(what) => format!("{} not configured", what),
            AppError::InvalidSetting(_) => "Unexpected error during sync".to_string(),
            AppError::Authentication => "Invalid signature".to_string(),
            AppError::Upstream(_) => "Error fetching tasks from ClickUp".to_string(),
            AppError::MalformedInput(_) => "Error processing webhook".to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Authentication => warn!(error = %self, "request_unauthorized"),
            _ => error!(error = %self, status_code = status.as_u16(), "request_failed"),
        }

        (
            status,
            Json(ErrorResponse {
                status: "error",
                error: self.public_message(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Configuration("Webhook secret").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(AppError::Authentication.status_code(), StatusCode::UNAUTHORIZED);

        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            AppError::MalformedInput(parse_err).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let upstream = ClickUpError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(
            AppError::Upstream(upstream).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_public_message_hides_upstream_body() {
        let err = AppError::Upstream(ClickUpError::Status {
            status: 401,
            body: "{\"err\":\"Token invalid\",\"ECODE\":\"OAUTH_025\"}".to_string(),
        });
        let message = err.public_message();
        assert_eq!(message, "Error fetching tasks from ClickUp");
        assert!(!message.contains("OAUTH_025"));
    }

    #[test]
    fn test_invalid_setting_is_generic() {
        let err = AppError::InvalidSetting("API base URL");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Unexpected error during sync");
    }

    #[test]
    fn test_configuration_message() {
        assert_eq!(
            AppError::Configuration("Webhook secret").public_message(),
            "Webhook secret not configured"
        );
    }
}
