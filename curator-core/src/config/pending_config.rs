use serde::{Deserialize, Serialize};

use super::defaults;

/// Pending item lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PendingConfig {
    /// Minutes before an unconfirmed item expires.
    pub ttl_minutes: i64,
    /// Interval for callers running a periodic cleanup sweep. Lazy expiry
    /// keeps the store correct without one.
    pub cleanup_interval_seconds: u64,
}

impl Default for PendingConfig {
    fn default() -> Self {
        Self {
            ttl_minutes: defaults::DEFAULT_PENDING_TTL_MINUTES,
            cleanup_interval_seconds: defaults::DEFAULT_CLEANUP_INTERVAL_SECS,
        }
    }
}
