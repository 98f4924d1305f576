//! Cache manager
//!
//! Get/set/delete orchestration over the bounded store, freshness
//! classification, background revalidation, and preloading.

mod manager;
mod types;


pub use manager::CacheManager;
pub use types::CacheStats;
