//! Webhook message builder and HTTP delivery

mod client;
mod config;
mod error;
mod identity;
mod message;
mod transport;

pub use client::{parse_webhook_url, ClientConfig, Delivery, WebhookClient};
pub use config::{WebhookConfig, WEBHOOK_URL_ENV};
pub use error::WebhookError;
pub use identity::Identity;
pub use message::{Webhook, CONTENT_MAX};
pub use transport::{HttpTransport, Transport};

pub use reqwest::StatusCode;
