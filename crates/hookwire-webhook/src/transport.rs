//! HTTP delivery of pre-built webhook bodies

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::error::WebhookError;

/// Posts a JSON body to a URL and reports the response status
///
/// Implementations do not retry, throttle, or read the response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, url: &str, body: String) -> Result<StatusCode, WebhookError>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Transport without a request timeout
    pub fn new() -> Result<Self, WebhookError> {
        Self::with_timeout(None)
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, WebhookError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| WebhookError::HttpError(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<StatusCode, WebhookError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::post;
    use axum::Router;
    use tokio::net::TcpListener;
    use tokio::sync::mpsc;

    /// Serve a single route that records what it receives
    async fn spawn_receiver(
        reply: AxumStatus,
    ) -> (String, mpsc::UnboundedReceiver<(Option<String>, String)>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = Router::new().route(
            "/api/webhooks/1/token",
            post(move |headers: HeaderMap, body: String| {
                let tx = tx.clone();
                async move {
                    let content_type = headers
                        .get("content-type")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    let _ = tx.send((content_type, body));
                    reply
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}/api/webhooks/1/token", addr), rx)
    }

    #[tokio::test]
    async fn test_posts_json_body() {
        let (url, mut rx) = spawn_receiver(AxumStatus::NO_CONTENT).await;
        let transport = HttpTransport::new().unwrap();

        let status = transport
            .post_json(&url, r#"{"content":"hi"}"#.to_string())
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (content_type, body) = rx.recv().await.unwrap();
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, r#"{"content":"hi"}"#);
    }

    #[tokio::test]
    async fn test_error_status_is_returned_verbatim() {
        let (url, _rx) = spawn_receiver(AxumStatus::BAD_REQUEST).await;
        let transport = HttpTransport::with_timeout(Some(Duration::from_secs(5))).unwrap();

        let status = transport.post_json(&url, "{}".to_string()).await.unwrap();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(status.to_string(), "400 Bad Request");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new().unwrap();
        let err = transport
            .post_json(&format!("http://{}/hook", addr), "{}".to_string())
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }
}
