//! # dashcache
//!
//! Client-side API response cache for admin dashboards: bounded LRU storage,
//! TTL + stale-while-revalidate freshness, concurrent-request deduplication,
//! pattern-based invalidation, and best-effort cache warming.
//!
//! The cache memoizes a [`Transport`] capability (any `fetch`-shaped HTTP
//! client); [`HttpTransport`] is the bundled reqwest implementation.
//!
//! ## Semantics
//!
//! - A read within `ttl` of the last write is a **fresh hit**.
//! - Between `ttl` and `ttl + stale_while_revalidate` the old value is still
//!   served while a single background refresh runs; concurrent readers of the
//!   same stale key share one network call.
//! - Past that window the entry is dropped and the read is a **hard miss**.
//! - Inserting beyond `max_size` evicts the least recently accessed key.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use dashcache::{CacheConfig, CacheManager, HttpTransport};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     dashcache::utils::logging::init("dashcache=info");
//!
//!     let transport = HttpTransport::new(
//!         "https://admin.example.com",
//!         Duration::from_secs(10),
//!     )?;
//!     let cache = CacheManager::new(CacheConfig::default(), Arc::new(transport))?;
//!
//!     // Miss: fetch, then cache
//!     if cache.get::<serde_json::Value>("/api/courses", None).await?.is_none() {
//!         cache.preload("/api/courses", None).await?;
//!     }
//!
//!     // Fresh or stale-but-usable hit
//!     let courses: Option<serde_json::Value> = cache.get("/api/courses", None).await?;
//!     println!("{courses:?}");
//!     Ok(())
//! }
//! ```
//!
//! Managers are independent: construct one per concern and inject it where
//! needed. There is no process-wide default instance.

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod transport;
pub mod utils;

pub use config::CacheConfig;
pub use core::dedup::PendingRequests;
pub use core::entry::CacheEntry;
pub use core::invalidation::CacheInvalidator;
pub use core::key::CacheKey;
pub use core::manager::{CacheManager, CacheStats};
pub use core::store::BoundedStore;
pub use core::warmer::{CacheWarmer, CredentialSource, StaticToken, WarmupTarget};
pub use transport::{
    HttpTransport, ResponseHeaders, Transport, TransportError, TransportResponse,
};
pub use utils::error::{CacheError, Result};
