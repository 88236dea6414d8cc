//! Webhook message payload

use hookwire_embed::{Embed, Fragment, WireFormat};

use crate::client::{Delivery, WebhookClient};
use crate::error::WebhookError;

/// Maximum length of plain text content
pub const CONTENT_MAX: usize = 2000;

/// A message bound for one webhook
///
/// Empty strings and a false `tts` never reach the wire. The body is
/// `{}` when nothing is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Webhook {
    username: String,
    avatar_url: String,
    webhook_url: String,
    format: WireFormat,

    /// Plain text content (up to 2000 characters)
    pub content: String,

    /// Whether this is a TTS message
    pub tts: bool,

    /// Rich embed
    pub embed: Embed,
}

impl Webhook {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            ..Default::default()
        }
    }

    /// Set the username for this message (overrides webhook default)
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the avatar URL for this message (overrides webhook default)
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_tts(mut self, tts: bool) -> Self {
        self.tts = tts;
        self
    }

    pub fn with_embed(mut self, embed: Embed) -> Self {
        self.embed = embed;
        self
    }

    pub fn with_wire_format(mut self, format: WireFormat) -> Self {
        self.format = format;
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }

    pub fn wire_format(&self) -> WireFormat {
        self.format
    }

    /// Top-level body entries: username, avatar_url, content, tts, embeds
    pub fn render(&self) -> Fragment {
        let mut body = Fragment::new();
        if !self.username.is_empty() {
            body.push("username", self.username.as_str());
        }
        if !self.avatar_url.is_empty() {
            body.push("avatar_url", self.avatar_url.as_str());
        }
        if !self.content.is_empty() {
            body.push("content", self.content.as_str());
        }
        if self.tts {
            body.push("tts", self.format.flag(true));
        }
        body.extend(self.embed.render(self.format));
        body
    }

    /// JSON body that would be posted to the webhook
    pub fn build(&self) -> Result<String, WebhookError> {
        Ok(self.render().to_json()?)
    }

    /// Check the message against Discord's payload rules
    pub fn validate(&self) -> Result<(), WebhookError> {
        if self.content.is_empty() && self.embed.is_empty() {
            return Err(WebhookError::EmptyPayload);
        }

        let content_len = self.content.chars().count();
        if content_len > CONTENT_MAX {
            return Err(WebhookError::ContentTooLong {
                limit: CONTENT_MAX,
                actual: content_len,
            });
        }

        self.embed.validate_for(self.format)?;
        Ok(())
    }

    /// Build the body and POST it with a default client
    pub async fn send(&self) -> Result<Delivery, WebhookError> {
        WebhookClient::new()?.send(self).await
    }
}
