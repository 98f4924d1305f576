//! Invalidation strategies
//!
//! Thin policy layer over the manager's primitives. Tag and dependency
//! invalidation match literally against serialized keys (`url:paramsJSON`),
//! so a tag is only found when it appears inside the URL or parameters.
//! This coarseness is deliberate; there is no tag index.

use crate::core::manager::CacheManager;
use crate::utils::error::Result;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Invalidation policies for a cache manager
#[derive(Clone)]
pub struct CacheInvalidator {
    manager: CacheManager,
}

impl CacheInvalidator {
    /// Wrap a manager with invalidation policies
    pub fn new(manager: CacheManager) -> Self {
        Self { manager }
    }

    /// Delete exactly one key
    pub fn invalidate_specific(&self, url: &str, params: Option<&Value>) -> bool {
        self.manager.delete(url, params)
    }

    /// Delete every key containing any of the given tags literally.
    ///
    /// Returns the total number of entries removed.
    pub fn invalidate_by_tags(&self, tags: &[&str]) -> Result<usize> {
        let mut removed = 0;
        for tag in tags {
            removed += self.manager.delete_by_pattern(&regex::escape(tag))?;
        }
        debug!(?tags, removed, "tag invalidation");
        Ok(removed)
    }

    /// Delete every key containing the dependency name literally
    pub fn invalidate_by_dependency(&self, dependency: &str) -> Result<usize> {
        self.manager.delete_by_pattern(&regex::escape(dependency))
    }

    /// Clear the store and all pending-request bookkeeping
    pub fn invalidate_all(&self) {
        self.manager.clear();
    }

    /// Time-based invalidation is already enforced by the TTL check every
    /// `get` performs; nothing to do here. Present for API symmetry.
    pub fn invalidate_by_time(&self, _max_age: Duration) {}
}
