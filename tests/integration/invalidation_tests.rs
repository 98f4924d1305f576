//! Pattern and tag invalidation through the public API

#[cfg(test)]
mod tests {
    use crate::common::RecordingTransport;
    use dashcache::{CacheConfig, CacheInvalidator, CacheManager};
    use serde_json::json;
    use std::sync::Arc;

    fn cache() -> CacheManager {
        CacheManager::new(CacheConfig::default(), Arc::new(RecordingTransport::ok())).unwrap()
    }

    #[tokio::test]
    async fn test_delete_by_pattern_leaves_unrelated_keys() {
        let cache = cache();
        cache.set("/api/courses", &json!([]), None, None).unwrap();
        cache.set("/api/courses/42", &json!({}), None, None).unwrap();
        cache.set("/api/classrooms", &json!([]), None, None).unwrap();
        cache.set("/api/users", &json!([]), None, None).unwrap();

        let removed = cache.delete_by_pattern("course").unwrap();

        assert_eq!(removed, 2);
        assert!(!cache.has("/api/courses", None));
        assert!(!cache.has("/api/courses/42", None));
        assert!(cache.has("/api/classrooms", None));
        assert!(cache.has("/api/users", None));
    }

    #[tokio::test]
    async fn test_delete_by_pattern_accepts_real_regex() {
        let cache = cache();
        cache.set("/api/users/1", &json!({}), None, None).unwrap();
        cache.set("/api/users/2", &json!({}), None, None).unwrap();
        cache.set("/api/users/1/notifications", &json!([]), None, None).unwrap();

        let removed = cache.delete_by_pattern(r"^/api/users/\d+$").unwrap();

        assert_eq!(removed, 2);
        assert!(cache.has("/api/users/1/notifications", None));
    }

    #[tokio::test]
    async fn test_invalidator_over_manager_primitives() {
        let cache = cache();
        cache.set("/api/courses", &json!([]), None, None).unwrap();
        cache
            .set("/api/grades", &json!([]), Some(&json!({"course_id": 9})), None)
            .unwrap();
        cache.set("/api/teachers", &json!([]), None, None).unwrap();

        let invalidator = CacheInvalidator::new(cache.clone());
        // Matches the URL of one entry and the serialized params of another
        let removed = invalidator.invalidate_by_tags(&["course"]).unwrap();

        assert_eq!(removed, 2);
        assert!(cache.has("/api/teachers", None));
        assert_eq!(cache.stats().size, 1);
    }
}
