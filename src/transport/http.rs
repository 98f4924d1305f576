//! reqwest-backed transport

use super::{ResponseHeaders, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP transport over a shared [`reqwest::Client`]
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport with a request timeout.
    ///
    /// `base_url` is prepended to relative request paths.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError {
                status: None,
                message: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Create a transport from an existing client
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}{}", self.base_url.trim_end_matches('/'), url)
        }
    }

    fn query_pairs(params: &Value) -> Vec<(String, String)> {
        match params {
            Value::Object(map) => map
                .iter()
                .map(|(k, v)| {
                    let rendered = match v {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    (k.clone(), rendered)
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(
        &self,
        url: &str,
        params: Option<&Value>,
    ) -> Result<TransportResponse, TransportError> {
        let mut request = self.client.get(self.absolute_url(url));
        if let Some(params) = params {
            request = request.query(&Self::query_pairs(params));
        }

        let response = request.send().await.map_err(|e| TransportError {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError {
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string(),
            });
        }

        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let headers = ResponseHeaders {
            etag: header("etag"),
            last_modified: header("last-modified"),
        };

        let data: Value = response.json().await.map_err(|e| TransportError {
            status: None,
            message: format!("failed to decode response body: {e}"),
        })?;

        debug!(%url, "transport fetch completed");
        Ok(TransportResponse { data, headers })
    }
}
