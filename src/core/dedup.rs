//! Revalidation dedup controller
//!
//! Guarantees at most one in-flight fetch per key under arbitrary concurrent
//! callers. Callers joining an outstanding fetch get a clone of the same
//! shared future; no second network call is issued. A detached driver task
//! polls every fetch to completion, so fire-and-forget callers (stale reads)
//! still cause the refresh to run, and removes the map entry when the fetch
//! settles, success or failure.

use crate::core::key::CacheKey;
use crate::utils::error::CacheError;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::sync::Arc;
use tracing::warn;

/// A deduplicated in-flight fetch, cloneable by any number of joiners
pub type FetchFuture = Shared<BoxFuture<'static, Result<(), CacheError>>>;

/// Tracks in-flight fetches keyed by cache key
#[derive(Clone, Default)]
pub struct PendingRequests {
    inflight: Arc<DashMap<CacheKey, FetchFuture>>,
}

impl PendingRequests {
    /// Create an empty controller
    pub fn new() -> Self {
        Self::default()
    }

    /// Join the in-flight fetch for `key`, or start one.
    ///
    /// `fetch` is only invoked when no fetch is outstanding for the key.
    /// Must be called from within a tokio runtime.
    pub fn join_or_spawn<F>(&self, key: CacheKey, fetch: F) -> FetchFuture
    where
        F: FnOnce() -> BoxFuture<'static, Result<(), CacheError>>,
    {
        let fut = match self.inflight.entry(key.clone()) {
            Entry::Occupied(existing) => return existing.get().clone(),
            Entry::Vacant(slot) => {
                let fut = fetch().shared();
                slot.insert(fut.clone());
                fut
            }
        };

        // Driver task: completes the fetch even if every caller dropped its
        // handle, then removes the pending entry whatever the outcome.
        let inflight = Arc::clone(&self.inflight);
        let driver = fut.clone();
        tokio::spawn(async move {
            if let Err(err) = driver.await {
                warn!(key = %key, error = %err, "background refresh failed");
            }
            inflight.remove(&key);
        });

        fut
    }

    /// Number of fetches currently outstanding
    pub fn len(&self) -> usize {
        self.inflight.len()
    }

    /// Whether no fetch is outstanding
    pub fn is_empty(&self) -> bool {
        self.inflight.is_empty()
    }

    /// Drop all pending entries.
    ///
    /// Outstanding fetches keep running to completion; only the
    /// deduplication bookkeeping is discarded.
    pub fn clear(&self) {
        self.inflight.clear();
    }
}
