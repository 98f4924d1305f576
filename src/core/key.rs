//! Cache key derivation
//!
//! Keys are derived deterministically from `(url, params)`. Parameter objects
//! are serialized with sorted keys at every nesting depth, so two logically
//! identical requests always map to the same key regardless of the order the
//! caller built the parameter object in.

use serde_json::Value;
use std::fmt;

/// Cache key for a request
///
/// Serialized form is `url` or `url:{params_json}`; keeping it a plain
/// string is what makes coarse pattern invalidation
/// ([`CacheManager::delete_by_pattern`](crate::CacheManager::delete_by_pattern))
/// possible.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive a key from a URL and optional request parameters.
    pub fn new(url: &str, params: Option<&Value>) -> Self {
        // serde_json's default Map is BTreeMap-backed, so object keys
        // serialize in sorted order at every depth. Do not enable the
        // `preserve_order` feature; key stability depends on this.
        match params {
            Some(p) => CacheKey(format!("{url}:{p}")),
            None => CacheKey(url.to_string()),
        }
    }

    /// The serialized form of the key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
