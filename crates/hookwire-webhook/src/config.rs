//! File and environment configuration

use hookwire_embed::WireFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::client::{ClientConfig, WebhookClient};
use crate::error::WebhookError;
use crate::identity::Identity;
use crate::message::Webhook;

/// Environment variable consulted when the config has no webhook URL
pub const WEBHOOK_URL_ENV: &str = "HOOKWIRE_WEBHOOK_URL";

/// Webhook settings, usually read from a TOML file
///
/// ```toml
/// webhook_url = "https://discord.com/api/webhooks/123/token"
/// username = "deploy-bot"
/// wire_format = "typed"
/// timeout_secs = 10
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    pub webhook_url: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub wire_format: WireFormat,
    pub timeout_secs: Option<u64>,
    pub dry_run: bool,
    pub validate: bool,
}

impl WebhookConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, WebhookError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WebhookError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            WebhookError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Webhook URL from config, falling back to the environment
    pub fn resolve_webhook_url(&self) -> Result<String, WebhookError> {
        if let Some(ref url) = self.webhook_url {
            if !url.is_empty() {
                return Ok(url.clone());
            }
        }

        match std::env::var(WEBHOOK_URL_ENV) {
            Ok(url) if !url.is_empty() => Ok(url),
            _ => Err(WebhookError::ConfigError(format!(
                "No webhook URL provided. Set {} or webhook_url in config",
                WEBHOOK_URL_ENV
            ))),
        }
    }

    pub fn identity(&self) -> Result<Identity, WebhookError> {
        Ok(Identity {
            username: self.username.clone().unwrap_or_default(),
            avatar_url: self.avatar_url.clone().unwrap_or_default(),
            webhook_url: self.resolve_webhook_url()?,
        })
    }

    /// Empty message carrying the configured identity and wire format
    pub fn webhook(&self) -> Result<Webhook, WebhookError> {
        Ok(self.identity()?.webhook().with_wire_format(self.wire_format))
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            dry_run: self.dry_run,
            validate: self.validate,
        }
    }

    pub fn client(&self) -> Result<WebhookClient, WebhookError> {
        WebhookClient::with_config(self.client_config())
    }
}
