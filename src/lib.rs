//! Hookwire
//!
//! Build Discord-compatible webhook messages with a rich embed and post
//! them over HTTP.
//!
//! ```no_run
//! use hookwire::{EmbedBuilder, Identity};
//!
//! # async fn run() -> Result<(), hookwire::WebhookError> {
//! let webhook = Identity::new("https://discord.com/api/webhooks/123/token")
//!     .with_username("deploy-bot")
//!     .webhook()
//!     .with_content("Deploy finished")
//!     .with_embed(EmbedBuilder::new().title("v1.2.0").color("57F287").build());
//!
//! let delivery = webhook.send().await?;
//! println!("{}", delivery.status_line());
//! # Ok(())
//! # }
//! ```

pub use hookwire_embed::*;
pub use hookwire_observability::{
    build_env_filter, init_default_logging, init_logging, LogFormat, LoggingError,
};
pub use hookwire_webhook::*;
