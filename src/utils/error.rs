//! Error handling for the cache
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for the cache
pub type Result<T> = std::result::Result<T, CacheError>;

/// Main error type for the cache
///
/// The enum is `Clone` because in-flight fetches are shared between
/// concurrent callers as [`futures::future::Shared`] futures, whose
/// output must be cloneable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// HTTP 401 from the transport; never cached, raised distinctly so
    /// callers can trigger re-authentication
    #[error("unauthorized")]
    Unauthorized,

    /// Any other transport failure; `status` is `None` for network-level
    /// errors that never produced an HTTP response
    #[error("transport error (status {status:?}): {message}")]
    Transport {
        /// HTTP status code, if a response was received
        status: Option<u16>,
        /// Human-readable failure description
        message: String,
    },

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invalid invalidation pattern
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CacheError {
    fn from(err: serde_json::Error) -> Self {
        CacheError::Serialization(err.to_string())
    }
}

impl From<regex::Error> for CacheError {
    fn from(err: regex::Error) -> Self {
        CacheError::InvalidPattern(err.to_string())
    }
}

impl CacheError {
    /// Whether this error represents a missing or rejected credential
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, CacheError::Unauthorized)
    }
}
