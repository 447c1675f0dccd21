//! Webhook alert delivery.

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::alert::Alerter;
use crate::config::AlertConfig;
use crate::observability::metrics;

/// Errors raised while delivering an alert.
#[derive(Debug, Error)]
pub enum AlertError {
    /// The request never got a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The webhook answered with a non-success status.
    #[error("webhook rejected alert with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

/// Posts alerts as `{"content": ...}` to a single webhook.
///
/// Without a configured destination every notification is a no-op.
#[derive(Debug, Clone)]
pub struct WebhookAlerter {
    client: reqwest::Client,
    destination: Option<String>,
}

impl WebhookAlerter {
    pub fn new(config: &AlertConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            destination: config.webhook_url.clone(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.destination.is_some()
    }

    /// Deliver one message. Returns `Ok(false)` when alerting is disabled.
    pub async fn send(&self, message: &str) -> Result<bool, AlertError> {
        let Some(destination) = &self.destination else {
            return Ok(false);
        };

        let response = self
            .client
            .post(destination)
            .json(&WebhookPayload { content: message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AlertError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(true)
    }
}

impl Alerter for WebhookAlerter {
    async fn notify(&self, message: &str) {
        match self.send(message).await {
            Ok(true) => {
                tracing::info!("Alert delivered");
                metrics::record_alert("sent");
            }
            Ok(false) => {
                tracing::debug!("Alerting disabled, skipping notification");
                metrics::record_alert("disabled");
            }
            Err(e) => {
                tracing::error!(error = %e, "Alert failed");
                metrics::record_alert("failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    fn alerter(webhook_url: Option<String>) -> WebhookAlerter {
        WebhookAlerter::new(&AlertConfig {
            webhook_url,
            timeout_secs: 2,
        })
        .unwrap()
    }

    /// One-shot webhook that replies with `status_line` and hands back the raw request.
    async fn webhook(status_line: &'static str) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            // Read until the JSON body has arrived
            while !raw.ends_with(b"}") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
            }
            let response = format!("HTTP/1.1 {}\r\nContent-Length: 4\r\nConnection: close\r\n\r\nnope", status_line);
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            let _ = tx.send(String::from_utf8_lossy(&raw).into_owned());
        });
        (format!("http://{}/hook", addr), rx)
    }

    #[tokio::test]
    async fn test_disabled_is_noop() {
        let alerter = alerter(None);
        assert!(!alerter.is_enabled());
        assert!(!alerter.send("ignored").await.unwrap());
    }

    #[tokio::test]
    async fn test_posts_content_payload() {
        let (url, request) = webhook("204 No Content").await;
        let alerter = alerter(Some(url));

        assert!(alerter.send("site is down").await.unwrap());

        let raw = request.await.unwrap();
        assert!(raw.starts_with("POST /hook"));
        assert!(raw.ends_with(r#"{"content":"site is down"}"#));
    }

    #[tokio::test]
    async fn test_rejection_carries_status() {
        let (url, _request) = webhook("400 Bad Request").await;
        let alerter = alerter(Some(url));

        match alerter.send("x").await {
            Err(AlertError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "nope");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_notify_swallows_transport_errors() {
        let addr = TcpListener::bind("127.0.0.1:0").await.unwrap().local_addr().unwrap();
        let alerter = alerter(Some(format!("http://{}/hook", addr)));

        assert!(alerter.send("x").await.is_err());
        // Must return normally
        alerter.notify("x").await;
    }
}
