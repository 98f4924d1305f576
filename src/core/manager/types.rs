//! Cache manager type definitions

use crate::config::CacheConfig;
use std::time::Duration;

/// Freshness classification of a stored entry at read time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Freshness {
    /// `age < ttl`: serve as-is
    Fresh,
    /// `ttl <= age < ttl + swr`: serve, but refresh in the background
    Stale,
    /// `age >= ttl + swr`: unusable, drop and report a miss
    Expired,
}

impl Freshness {
    /// Classify an entry age against the configured windows
    pub(crate) fn classify(age: Duration, config: &CacheConfig) -> Self {
        if age < config.ttl {
            Freshness::Fresh
        } else if age < config.hard_expiry() {
            Freshness::Stale
        } else {
            Freshness::Expired
        }
    }
}

/// Cache statistics snapshot (returned to callers)
///
/// An observability hook, not load-bearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Entries currently stored
    pub size: usize,
    /// Configured capacity
    pub max_size: usize,
    /// Fetches currently in flight
    pub pending_requests: usize,
}
