//! Shared test infrastructure

use async_trait::async_trait;
use dashcache::{ResponseHeaders, Transport, TransportError, TransportResponse};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Transport that records every request and can fail selected URLs
pub struct RecordingTransport {
    calls: Mutex<Vec<String>>,
    failures: HashMap<String, u16>,
    delay: Duration,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn ok() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failures: HashMap::new(),
            delay: Duration::from_millis(10),
        }
    }

    /// Respond to `url` with the given HTTP status instead of a payload
    pub fn failing_url(mut self, url: &str, status: u16) -> Self {
        self.failures.insert(url.to_string(), status);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn get(
        &self,
        url: &str,
        _params: Option<&Value>,
    ) -> Result<TransportResponse, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if let Some(status) = self.failures.get(url) {
            return Err(TransportError {
                status: Some(*status),
                message: "injected failure".to_string(),
            });
        }
        Ok(TransportResponse {
            data: json!({ "url": url }),
            headers: ResponseHeaders::default(),
        })
    }
}
