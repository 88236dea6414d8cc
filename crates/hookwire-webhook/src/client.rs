//! Webhook client: URL checks, optional validation, dry-run and delivery

use reqwest::{StatusCode, Url};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::error::WebhookError;
use crate::message::Webhook;
use crate::transport::{HttpTransport, Transport};

/// Configuration for the webhook client
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// HTTP request timeout, none by default
    pub timeout: Option<Duration>,

    /// Whether to run in dry-run mode (no actual requests)
    pub dry_run: bool,

    /// Reject messages that break Discord's payload rules before sending
    pub validate: bool,
}

/// Outcome of a send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivery {
    pub status: StatusCode,
    pub dry_run: bool,
}

impl Delivery {
    /// Status line such as `204 No Content`
    ///
    /// reqwest does not expose the reason phrase the server sent, so the
    /// line is rebuilt from the code's canonical reason. A code without one
    /// reads `599 <unknown status code>`.
    pub fn status_line(&self) -> String {
        self.status.to_string()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Sends webhook messages through a [`Transport`]
#[derive(Clone)]
pub struct WebhookClient {
    transport: Arc<dyn Transport>,
    config: ClientConfig,
}

impl WebhookClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self, WebhookError> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client backed by [`HttpTransport`]
    pub fn with_config(config: ClientConfig) -> Result<Self, WebhookError> {
        let transport = HttpTransport::with_timeout(config.timeout)?;
        Ok(Self::with_transport(Arc::new(transport), config))
    }

    /// Create a client with a caller-supplied transport
    pub fn with_transport(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the message body and POST it to the message's webhook URL
    ///
    /// Non-success statuses are not errors; they come back in the
    /// returned [`Delivery`].
    pub async fn send(&self, webhook: &Webhook) -> Result<Delivery, WebhookError> {
        let url = parse_webhook_url(webhook.webhook_url())?;
        let host = url.host_str().unwrap_or_default().to_string();

        if self.config.validate {
            webhook.validate()?;
        }

        let body = webhook.build()?;

        if self.config.dry_run {
            info!(host = %host, "[DRY RUN] Would send webhook message:\n{}", body);
            return Ok(Delivery {
                status: StatusCode::NO_CONTENT,
                dry_run: true,
            });
        }

        debug!(host = %host, bytes = body.len(), "Sending webhook message");

        let status = self
            .transport
            .post_json(webhook.webhook_url(), body)
            .await
            .map_err(|e| {
                error!(host = %host, error = %e, "Webhook request failed");
                e
            })?;

        if status.is_success() {
            debug!(status = %status, "Webhook message delivered");
        } else {
            warn!(status = %status, "Webhook returned non-success status");
        }

        Ok(Delivery {
            status,
            dry_run: false,
        })
    }

    /// Send a simple text message
    pub async fn send_text(
        &self,
        webhook_url: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Delivery, WebhookError> {
        let webhook = Webhook::new(webhook_url).with_content(content);
        self.send(&webhook).await
    }
}

/// Parse a webhook URL, accepting only absolute http(s) URLs
pub fn parse_webhook_url(webhook_url: &str) -> Result<Url, WebhookError> {
    let url = Url::parse(webhook_url)
        .map_err(|e| WebhookError::InvalidWebhookUrl(format!("{}: {}", webhook_url, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(WebhookError::InvalidWebhookUrl(format!(
            "unsupported scheme {:?}",
            scheme
        ))),
    }
}
