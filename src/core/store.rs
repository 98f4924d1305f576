//! Bounded LRU store
//!
//! Capacity-bound only: no TTL logic lives here. Freshness is the manager's
//! responsibility; eviction policy (capacity) and freshness policy (time) are
//! independent axes and are kept apart.

use crate::core::entry::CacheEntry;
use crate::core::key::CacheKey;
use crate::utils::error::{CacheError, Result};
use lru::LruCache;
use std::num::NonZeroUsize;
use tracing::debug;

/// Key→entry map with a fixed capacity and least-recently-used eviction
///
/// Both `get` and `set` promote the touched key to most-recently-used.
/// Inserting a new key at capacity evicts exactly one entry, the least
/// recently accessed one.
pub struct BoundedStore {
    entries: LruCache<CacheKey, CacheEntry>,
}

impl BoundedStore {
    /// Create a store holding at most `max_size` entries
    pub fn new(max_size: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_size).ok_or_else(|| {
            CacheError::Config("max_size must be greater than 0".to_string())
        })?;
        Ok(Self {
            entries: LruCache::new(capacity),
        })
    }

    /// Insert or replace an entry, promoting the key to most-recently-used
    pub fn set(&mut self, key: CacheKey, entry: CacheEntry) {
        if let Some((evicted, _)) = self.entries.push(key.clone(), entry) {
            // push returns the displaced pair; only a different key means
            // an actual LRU eviction rather than a same-key replacement
            if evicted != key {
                debug!(key = %evicted, "evicted least recently used entry");
            }
        }
    }

    /// Look up an entry, promoting the key to most-recently-used
    pub fn get(&mut self, key: &CacheKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    /// Look up an entry without touching recency order
    pub fn peek(&self, key: &CacheKey) -> Option<&CacheEntry> {
        self.entries.peek(key)
    }

    /// Whether the key is present (does not touch recency order)
    pub fn has(&self, key: &CacheKey) -> bool {
        self.entries.contains(key)
    }

    /// Remove an entry; returns whether it was present
    pub fn delete(&mut self, key: &CacheKey) -> bool {
        self.entries.pop(key).is_some()
    }

    /// Remove all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot of all keys, most recently used first
    pub fn keys(&self) -> Vec<CacheKey> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Iterate entries, most recently used first
    pub fn entries(&self) -> impl Iterator<Item = (&CacheKey, &CacheEntry)> {
        self.entries.iter()
    }

    /// Number of entries currently stored
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}
