//! Cache entry type

use serde_json::Value;
use std::time::Duration;
use tokio::time::Instant;

/// A cached response with metadata
///
/// Written whole on every `set`; a later write for the same key fully
/// replaces the entry, nothing is merged or mutated in place.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached payload
    pub data: Value,
    /// When the entry was written
    pub timestamp: Instant,
    /// `ETag` response header, captured for potential conditional requests
    pub etag: Option<String>,
    /// `Last-Modified` response header
    pub last_modified: Option<String>,
}

impl CacheEntry {
    /// Create an entry timestamped now
    pub fn new(data: Value, etag: Option<String>, last_modified: Option<String>) -> Self {
        Self {
            data,
            timestamp: Instant::now(),
            etag,
            last_modified,
        }
    }

    /// Time elapsed since the entry was written
    pub fn age(&self) -> Duration {
        self.timestamp.elapsed()
    }
}
