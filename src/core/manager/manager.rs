//! Cache manager implementation
//!
//! Orchestrates lookups against the bounded store, classifies freshness,
//! and hands refreshes to the dedup controller. All cache writes flow
//! through [`CacheManager::fetch_and_cache`] or [`CacheManager::set`].

use super::types::{CacheStats, Freshness};
use crate::config::CacheConfig;
use crate::core::dedup::{FetchFuture, PendingRequests};
use crate::core::entry::CacheEntry;
use crate::core::key::CacheKey;
use crate::core::store::BoundedStore;
use crate::transport::{ResponseHeaders, Transport};
use crate::utils::error::{CacheError, Result};
use futures::FutureExt;
use parking_lot::Mutex;
use regex::Regex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// API response cache with TTL + stale-while-revalidate freshness
///
/// Cheap to clone; clones share the same store and pending-request map.
/// Independent caches are made by constructing independent managers —
/// there is no process-wide default instance, callers inject the manager
/// they want.
#[derive(Clone)]
pub struct CacheManager {
    store: Arc<Mutex<BoundedStore>>,
    pending: PendingRequests,
    transport: Arc<dyn Transport>,
    config: CacheConfig,
}

impl CacheManager {
    /// Create a manager with its own store and pending-request map
    pub fn new(config: CacheConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let store = BoundedStore::new(config.max_size)?;
        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            pending: PendingRequests::new(),
            transport,
            config,
        })
    }

    /// Look up a cached response.
    ///
    /// Fresh entries are returned directly. Stale-but-usable entries are
    /// returned immediately while a background refresh is started; a
    /// refresh failure never reaches this caller, the entry simply stays
    /// stale until the hard-expiry boundary. Entries past
    /// `ttl + stale_while_revalidate` are dropped and reported as a miss.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        params: Option<&Value>,
    ) -> Result<Option<T>> {
        let key = CacheKey::new(url, params);

        let (data, freshness) = {
            let mut store = self.store.lock();
            match store.get(&key) {
                None => return Ok(None),
                Some(entry) => {
                    let freshness = Freshness::classify(entry.age(), &self.config);
                    if freshness == Freshness::Expired {
                        store.delete(&key);
                        debug!(%key, "entry past hard expiry, dropped");
                        return Ok(None);
                    }
                    (entry.data.clone(), freshness)
                }
            }
        };

        if freshness == Freshness::Stale {
            debug!(%key, "serving stale entry, refreshing in background");
            // Fire-and-forget: the dedup controller's driver task completes
            // the fetch; this caller already has its answer.
            let _ = self.revalidate(url, params);
        }

        Ok(Some(serde_json::from_value(data)?))
    }

    /// Write a response to the cache, fully replacing any previous entry
    pub fn set<T: Serialize>(
        &self,
        url: &str,
        data: &T,
        params: Option<&Value>,
        headers: Option<&ResponseHeaders>,
    ) -> Result<()> {
        let value = serde_json::to_value(data)?;
        self.insert(CacheKey::new(url, params), value, headers);
        Ok(())
    }

    /// Remove exactly one key; returns whether it was present
    pub fn delete(&self, url: &str, params: Option<&Value>) -> bool {
        self.store.lock().delete(&CacheKey::new(url, params))
    }

    /// Remove every key whose serialized form matches `pattern`.
    ///
    /// Returns the number of entries removed.
    pub fn delete_by_pattern(&self, pattern: &str) -> Result<usize> {
        let regex = Regex::new(pattern)?;
        let mut store = self.store.lock();
        let matching: Vec<CacheKey> = store
            .keys()
            .into_iter()
            .filter(|k| regex.is_match(k.as_str()))
            .collect();
        for key in &matching {
            store.delete(key);
        }
        if !matching.is_empty() {
            debug!(pattern, removed = matching.len(), "pattern invalidation");
        }
        Ok(matching.len())
    }

    /// Whether a key is present, regardless of freshness
    pub fn has(&self, url: &str, params: Option<&Value>) -> bool {
        self.store.lock().has(&CacheKey::new(url, params))
    }

    /// Drop every entry and all pending-request bookkeeping
    pub fn clear(&self) {
        self.store.lock().clear();
        self.pending.clear();
        debug!("cache cleared");
    }

    /// Ensure a usable entry exists for the key.
    ///
    /// No-op when a fresh or stale-but-usable entry is present. Otherwise
    /// joins the in-flight fetch for the key, or starts one, and awaits it.
    /// This is the one path that surfaces fetch errors to its caller.
    pub async fn preload(&self, url: &str, params: Option<&Value>) -> Result<()> {
        let key = CacheKey::new(url, params);
        {
            let store = self.store.lock();
            // peek: a warmer probing for entries should not perturb the
            // recency order real readers establish
            if let Some(entry) = store.peek(&key) {
                if Freshness::classify(entry.age(), &self.config) != Freshness::Expired {
                    return Ok(());
                }
            }
        }
        self.revalidate(url, params).await
    }

    /// Deduplicated refresh: join or start the single in-flight fetch for
    /// the key
    fn revalidate(&self, url: &str, params: Option<&Value>) -> FetchFuture {
        let key = CacheKey::new(url, params);
        let manager = self.clone();
        let url = url.to_string();
        let params = params.cloned();
        self.pending.join_or_spawn(key, move || {
            async move { manager.fetch_and_cache(&url, params.as_ref()).await }.boxed()
        })
    }

    /// Fetch from the transport and write the result.
    ///
    /// The single place cache writes occur on the network path. A 401 is
    /// raised as [`CacheError::Unauthorized`] and never cached; any other
    /// failure is wrapped with its status and message.
    async fn fetch_and_cache(&self, url: &str, params: Option<&Value>) -> Result<()> {
        let response = self
            .transport
            .get(url, params)
            .await
            .map_err(|e| match e.status {
                Some(401) => CacheError::Unauthorized,
                status => CacheError::Transport {
                    status,
                    message: e.message,
                },
            })?;

        self.insert(
            CacheKey::new(url, params),
            response.data,
            Some(&response.headers),
        );
        Ok(())
    }

    fn insert(&self, key: CacheKey, value: Value, headers: Option<&ResponseHeaders>) {
        let entry = CacheEntry::new(
            value,
            headers.and_then(|h| h.etag.clone()),
            headers.and_then(|h| h.last_modified.clone()),
        );
        self.store.lock().set(key, entry);
    }

    /// Snapshot of current cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.store.lock().len(),
            max_size: self.config.max_size,
            pending_requests: self.pending.len(),
        }
    }

    /// The configuration this manager was built with
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}
