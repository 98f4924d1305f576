//! Freshness lifecycle and LRU bounding through the public API

#[cfg(test)]
mod tests {
    use crate::common::RecordingTransport;
    use dashcache::{CacheConfig, CacheManager};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;

    fn small_cache(transport: Arc<RecordingTransport>) -> CacheManager {
        let config = CacheConfig {
            max_size: 2,
            ttl: Duration::from_secs(300),
            stale_while_revalidate: Duration::from_secs(120),
        };
        CacheManager::new(config, transport).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_freshness_lifecycle() {
        let transport = Arc::new(RecordingTransport::ok());
        let cache = CacheManager::new(CacheConfig::default(), transport.clone()).unwrap();

        // Miss, then populate via preload
        assert!(cache.get::<Value>("/api/courses", None).await.unwrap().is_none());
        cache.preload("/api/courses", None).await.unwrap();
        assert_eq!(transport.call_count(), 1);

        // Fresh window: served from cache, no network
        tokio::time::advance(Duration::from_secs(299)).await;
        assert!(cache.get::<Value>("/api/courses", None).await.unwrap().is_some());
        assert_eq!(transport.call_count(), 1);

        // Stale window: served, one background refresh
        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(cache.get::<Value>("/api/courses", None).await.unwrap().is_some());
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(transport.call_count(), 2);

        // The refresh reset the clock; past hard expiry the entry is gone
        tokio::time::advance(Duration::from_secs(421)).await;
        assert!(cache.get::<Value>("/api/courses", None).await.unwrap().is_none());
        assert!(!cache.has("/api/courses", None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lru_eviction_order() {
        let transport = Arc::new(RecordingTransport::ok());
        let cache = small_cache(transport);

        cache.set("/api/a", &json!(1), None, None).unwrap();
        cache.set("/api/b", &json!(2), None, None).unwrap();
        cache.set("/api/c", &json!(3), None, None).unwrap();

        // A was least recently accessed
        assert!(!cache.has("/api/a", None));
        assert!(cache.has("/api/b", None));
        assert!(cache.has("/api/c", None));

        // Reading B refreshes its recency, so D evicts C
        assert!(cache.get::<Value>("/api/b", None).await.unwrap().is_some());
        cache.set("/api/d", &json!(4), None, None).unwrap();

        assert!(cache.has("/api/b", None));
        assert!(!cache.has("/api/c", None));
        assert!(cache.has("/api/d", None));
        assert_eq!(cache.stats().size, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_stale_reads_share_one_refresh() {
        let transport = Arc::new(RecordingTransport::ok());
        let cache = CacheManager::new(CacheConfig::default(), transport.clone()).unwrap();
        cache.set("/api/users", &json!({"total": 5}), None, None).unwrap();

        tokio::time::advance(Duration::from_secs(310)).await;

        let (a, b, c, d) = tokio::join!(
            cache.get::<Value>("/api/users", None),
            cache.get::<Value>("/api/users", None),
            cache.get::<Value>("/api/users", None),
            cache.get::<Value>("/api/users", None),
        );
        for hit in [a, b, c, d] {
            assert_eq!(hit.unwrap(), Some(json!({"total": 5})));
        }

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clear_resets_everything() {
        let transport = Arc::new(RecordingTransport::ok());
        let cache = small_cache(transport);

        cache.set("/api/a", &json!(1), None, None).unwrap();
        cache.set("/api/b", &json!(2), None, None).unwrap();
        cache.clear();

        let stats = cache.stats();
        assert_eq!(stats.size, 0);
        assert_eq!(stats.pending_requests, 0);
        assert!(cache.get::<Value>("/api/a", None).await.unwrap().is_none());
    }
}
