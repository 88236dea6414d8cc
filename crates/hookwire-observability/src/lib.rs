//! Hookwire Observability
//!
//! Logging setup for applications that send webhooks.

pub mod logging;

pub use logging::{build_env_filter, init_default_logging, init_logging, LogFormat, LoggingError};
