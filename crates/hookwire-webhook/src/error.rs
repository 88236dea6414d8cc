//! Webhook error types

use hookwire_embed::EmbedError;
use thiserror::Error;

/// Webhook errors
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid webhook URL: {0}")]
    InvalidWebhookUrl(String),

    #[error("Request serialization failed: {0}")]
    SerializationError(String),

    #[error("Message has neither content nor embed")]
    EmptyPayload,

    #[error("Content exceeds maximum length of {limit} characters (got {actual})")]
    ContentTooLong { limit: usize, actual: usize },

    #[error("Invalid embed: {0}")]
    Embed(#[from] EmbedError),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl WebhookError {
    /// The request could not be issued or completed
    pub fn is_transport(&self) -> bool {
        matches!(self, WebhookError::HttpError(_) | WebhookError::Timeout)
    }
}

impl From<reqwest::Error> for WebhookError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WebhookError::Timeout
        } else {
            WebhookError::HttpError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        WebhookError::SerializationError(err.to_string())
    }
}

impl From<toml::de::Error> for WebhookError {
    fn from(err: toml::de::Error) -> Self {
        WebhookError::ConfigError(err.to_string())
    }
}
