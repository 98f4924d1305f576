//! Cache configuration

use crate::utils::error::{CacheError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_max_size() -> usize {
    100
}

fn default_ttl() -> Duration {
    Duration::from_secs(5 * 60)
}

fn default_swr() -> Duration {
    Duration::from_secs(2 * 60)
}

/// Durations are whole seconds on the wire (`{"ttl": 300}`)
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Cache configuration
///
/// Supplied per manager instance at construction; managers never share
/// configuration or state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of entries; the least recently accessed entry is
    /// evicted when an insert would exceed this
    #[serde(default = "default_max_size")]
    pub max_size: usize,
    /// How long an entry is considered fresh after being written, in seconds
    #[serde(default = "default_ttl", with = "duration_secs")]
    pub ttl: Duration,
    /// Grace period after `ttl` during which a stale entry is still served
    /// while a background refresh runs, in seconds
    #[serde(default = "default_swr", with = "duration_secs")]
    pub stale_while_revalidate: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
            ttl: default_ttl(),
            stale_while_revalidate: default_swr(),
        }
    }
}

impl CacheConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(CacheError::Config(
                "max_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Age at which an entry is no longer usable even as a stale value
    pub fn hard_expiry(&self) -> Duration {
        self.ttl + self.stale_while_revalidate
    }
}
