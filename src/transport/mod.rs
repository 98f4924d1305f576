//! HTTP transport capability
//!
//! The cache does not own the network: it consumes a [`Transport`] and
//! memoizes its responses. [`http::HttpTransport`] is the reqwest-backed
//! implementation; tests substitute counting mocks at the same seam.

pub mod http;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub use http::HttpTransport;

/// Response metadata captured alongside the payload
///
/// Identifies the resource version for potential conditional requests;
/// stored but not currently used to issue `If-None-Match`.
#[derive(Debug, Clone, Default)]
pub struct ResponseHeaders {
    /// `ETag` response header
    pub etag: Option<String>,
    /// `Last-Modified` response header
    pub last_modified: Option<String>,
}

/// A successful transport response
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// Decoded JSON payload
    pub data: Value,
    /// Version metadata
    pub headers: ResponseHeaders,
}

/// Transport-level failure
///
/// `status` is `None` when the request never produced an HTTP response
/// (connection refused, DNS failure, timeout inside the transport).
#[derive(Debug, Clone, Error)]
#[error("transport failure (status {status:?}): {message}")]
pub struct TransportError {
    /// HTTP status code, if any
    pub status: Option<u16>,
    /// Failure description
    pub message: String,
}

/// The consumed network capability
///
/// Timeouts are the transport's concern; the cache applies none of its own.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch `url` with optional query parameters.
    async fn get(
        &self,
        url: &str,
        params: Option<&Value>,
    ) -> Result<TransportResponse, TransportError>;
}
