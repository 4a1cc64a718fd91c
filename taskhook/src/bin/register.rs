//! Taskhook Register - create the ClickUp webhook for a list.
//!
//! Registers this server's public webhook URL for every supported task event
//! on one list. Run once per deployment:
//!
//! ```text
//! CLICKUP_API_TOKEN=pk_... CLICKUP_LIST_ID=901 \
//! WEBHOOK_URL=https://example.ngrok.io/webhook_listener taskhook-register
//! ```
//!
//! The generated webhook secret is printed to stdout (never logged); set it
//! as `CLICKUP_WEBHOOK_SECRET` for the web server.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskhook::clickup::{webhook_id, webhook_secret};
use taskhook::{ClickUpClient, Config, WebhookRegistration};

const USAGE: &str = "\
Usage:
  CLICKUP_API_TOKEN=<token> CLICKUP_LIST_ID=<list_id> WEBHOOK_URL=<url> taskhook-register

Where:
  CLICKUP_API_TOKEN: ClickUp API token (https://app.clickup.com/settings/apps)
  CLICKUP_LIST_ID:   ID of the list to watch (from the ClickUp URL)
  WEBHOOK_URL:       Public URL of /webhook_listener";

#[tokio::main]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    let config = Config::from_env();

    let (Some(api_token), Some(list_id), Some(webhook_url)) = (
        config.api_token.as_deref(),
        config.list_id.as_deref(),
        config.webhook_url.as_deref(),
    ) else {
        error!(
            api_token_set = config.api_token.is_some(),
            list_id_set = config.list_id.is_some(),
            webhook_url_set = config.webhook_url.is_some(),
            "register_missing_configuration"
        );
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    match register(&config, api_token, list_id, webhook_url).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "register_failed");
            ExitCode::FAILURE
        }
    }
}

async fn register(config: &Config, api_token: &str, list_id: &str, webhook_url: &str) -> Result<()> {
    let client = ClickUpClient::new(
        Client::new(),
        &config.api_base_url,
        api_token,
        Duration::from_millis(config.request_timeout_ms),
    )
    .context("Failed to create ClickUp client")?;

    let registration = WebhookRegistration::for_list(webhook_url, api_token, list_id);

    let response = client
        .create_webhook(list_id, &registration)
        .await
        .context("Failed to create webhook")?;

    info!(
        webhook_id = webhook_id(&response).unwrap_or("unknown"),
        list_id = list_id,
        endpoint = webhook_url,
        events = %registration.events.join(","),
        "register_webhook_created"
    );

    match webhook_secret(&response) {
        Some(secret) => println!("CLICKUP_WEBHOOK_SECRET={}", secret),
        None => warn!("register_webhook_secret_missing"),
    }

    Ok(())
}
