//! Cache warmer
//!
//! Best-effort bulk preloading for anticipated navigation and user data.
//! Individual failures are logged and never fail the batch. The domain
//! wrappers skip entirely when no credential is available, so an
//! unauthenticated bootstrap does not generate guaranteed-401 noise.

use crate::core::manager::CacheManager;
use futures::future::join_all;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// A single warm-up request
#[derive(Debug, Clone)]
pub struct WarmupTarget {
    /// Request URL
    pub url: String,
    /// Optional request parameters
    pub params: Option<Value>,
}

impl WarmupTarget {
    /// Target without parameters
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            params: None,
        }
    }

    /// Target with parameters
    pub fn with_params(url: impl Into<String>, params: Value) -> Self {
        Self {
            url: url.into(),
            params: Some(params),
        }
    }
}

/// Source of the caller's authentication credential
///
/// The warmer only checks for presence; it never inspects or sends the
/// token itself (the transport is expected to attach it).
pub trait CredentialSource: Send + Sync {
    /// The current auth token, if the user is authenticated
    fn auth_token(&self) -> Option<String>;
}

/// Fixed credential, mainly for tests and simple embedders
pub struct StaticToken(pub Option<String>);

impl CredentialSource for StaticToken {
    fn auth_token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Best-effort bulk preloader
#[derive(Clone)]
pub struct CacheWarmer {
    manager: CacheManager,
    credentials: Arc<dyn CredentialSource>,
}

impl CacheWarmer {
    /// Create a warmer over a manager
    pub fn new(manager: CacheManager, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            manager,
            credentials,
        }
    }

    /// Preload every target in parallel.
    ///
    /// Failures are caught and logged per target; the batch always runs
    /// to completion.
    pub async fn warm_up(&self, targets: &[WarmupTarget]) {
        let preloads = targets.iter().map(|target| {
            let manager = self.manager.clone();
            async move {
                if let Err(err) = manager.preload(&target.url, target.params.as_ref()).await {
                    warn!(url = %target.url, error = %err, "cache warm-up target failed");
                }
            }
        });
        join_all(preloads).await;
        debug!(targets = targets.len(), "cache warm-up batch finished");
    }

    /// Preload the data the dashboard needs right after a user signs in.
    ///
    /// Skips silently when no credential is present.
    pub async fn warm_up_user_data(&self, user_id: &str) {
        if self.credentials.auth_token().is_none() {
            debug!("skipping user-data warm-up: not authenticated");
            return;
        }
        let targets = [
            WarmupTarget::url(format!("/api/users/{user_id}")),
            WarmupTarget::url(format!("/api/users/{user_id}/notifications")),
            WarmupTarget::url(format!("/api/users/{user_id}/enrollments")),
        ];
        self.warm_up(&targets).await;
    }

    /// Preload the course catalog views most navigation lands on.
    ///
    /// Skips silently when no credential is present.
    pub async fn warm_up_course_data(&self) {
        if self.credentials.auth_token().is_none() {
            debug!("skipping course-data warm-up: not authenticated");
            return;
        }
        let targets = [
            WarmupTarget::with_params(
                "/api/courses",
                serde_json::json!({ "page": 1, "size": 20 }),
            ),
            WarmupTarget::url("/api/courses/categories"),
            WarmupTarget::url("/api/classrooms"),
        ];
        self.warm_up(&targets).await;
    }
}
