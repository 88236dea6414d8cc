use crate::message::Webhook;

/// Who a message is posted as, and where
///
/// `username` and `avatar_url` override the webhook's configured
/// defaults when non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub avatar_url: String,
    pub webhook_url: String,
}

impl Identity {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            ..Default::default()
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }

    /// Start a message posted under this identity
    pub fn webhook(&self) -> Webhook {
        Webhook::new(self.webhook_url.clone())
            .with_username(self.username.clone())
            .with_avatar_url(self.avatar_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_inherits_identity() {
        let identity = Identity::new("https://discord.com/api/webhooks/1/abc")
            .with_username("bot")
            .with_avatar_url("https://x/a.png");

        let webhook = identity.webhook();
        assert_eq!(webhook.webhook_url(), "https://discord.com/api/webhooks/1/abc");
        assert_eq!(webhook.username(), "bot");
        assert_eq!(webhook.avatar_url(), "https://x/a.png");
        assert!(webhook.content.is_empty());
        assert!(!webhook.tts);
    }
}
