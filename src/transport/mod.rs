//! Transport boundary
//!
//! The client hands a fully built, signed field-set to a [`Transport`] and
//! gets the raw response text back. Everything network-related (timeouts,
//! TLS, proxies) lives behind this trait; retry policy belongs to the
//! caller, not the client.

use crate::core::error::{PayTrError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;

/// A complete, signed field-set ready for form encoding. Always contains
/// the `paytr_token` field by the time it reaches a transport.
pub type FormFields = BTreeMap<String, String>;

/// Sends a signed field-set as a URL-encoded POST and returns the raw
/// response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_form(&self, url: &str, fields: &FormFields) -> Result<String>;
}

/// Default reqwest-backed transport
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { client }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_form(&self, url: &str, fields: &FormFields) -> Result<String> {
        let response = self
            .client
            .post(url)
            .form(fields)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PayTrError::transport(format!("gateway unavailable: timeout ({})", e))
                } else if e.is_connect() {
                    PayTrError::transport(format!("gateway unavailable: connection failed ({})", e))
                } else {
                    PayTrError::transport(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PayTrError::transport(format!("failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(PayTrError::transport(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        Ok(body)
    }
}
