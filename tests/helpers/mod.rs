//! Shared test helpers

use std::sync::Mutex;

use async_trait::async_trait;
use paytr::{FormFields, MerchantConfig, PayTrError, Transport};

/// Canned-response transport that records every request it receives.
pub struct MockTransport {
    responses: Mutex<Vec<String>>,
    requests: Mutex<Vec<(String, FormFields)>>,
}

impl MockTransport {
    /// Responses are served in the order given, one per request.
    pub fn new(responses: Vec<&str>) -> Self {
        let mut queued: Vec<String> = responses.into_iter().map(str::to_owned).collect();
        queued.reverse();
        Self {
            responses: Mutex::new(queued),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// All requests sent so far, as `(url, fields)` pairs.
    pub fn requests(&self) -> Vec<(String, FormFields)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_form(&self, url: &str, fields: &FormFields) -> paytr::Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((url.to_owned(), fields.clone()));
        self.responses
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| PayTrError::transport("no response queued"))
    }
}

pub fn test_config() -> MerchantConfig {
    MerchantConfig::new("123456", "test-merchant-key", "test-merchant-salt").with_test_mode(true)
}
