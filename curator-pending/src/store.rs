//! PendingStore — concurrent pending-item registry via DashMap.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use curator_core::config::CuratorConfig;
use curator_core::constants::{
    FALLBACK_PENDING_TTL_MINUTES, PENDING_ID_HEX_LEN, PENDING_ID_PREFIX,
};
use curator_core::models::PendingItem;

/// Thread-safe registry of items awaiting confirmation.
///
/// Intentionally in-memory: pending items are transient, and confirmation
/// is expected promptly while the submitter's context is fresh. Contents
/// do not survive a restart.
///
/// Expired entries are evicted lazily on every read path, so the store
/// stays correct without a background sweeper. `cleanup_expired` exists
/// for callers that want a periodic sweep anyway.
pub struct PendingStore {
    items: Arc<DashMap<String, PendingItem>>,
    ttl_minutes: i64,
}

impl PendingStore {
    /// Create a store with the TTL from configuration.
    pub fn new(config: &CuratorConfig) -> Self {
        Self::with_ttl(config.pending.ttl_minutes)
    }

    /// Create a store with an explicit TTL, overriding configuration.
    pub fn with_ttl(ttl_minutes: i64) -> Self {
        Self {
            items: Arc::new(DashMap::new()),
            ttl_minutes,
        }
    }

    /// Effective TTL in minutes.
    pub fn ttl_minutes(&self) -> i64 {
        self.ttl_minutes
    }

    /// Insert an item, assigning a fresh id first when the item carries
    /// none. Returns the effective id.
    pub fn add(&self, mut item: PendingItem) -> String {
        if item.id.is_empty() {
            item.id = generate_pending_id();
        }
        let id = item.id.clone();
        debug!(id = %id, kind = %item.submission.kind, "pending item added");
        self.items.insert(id.clone(), item);
        id
    }

    /// Look up an item by id (cloned snapshot).
    ///
    /// Returns `None` for unknown ids and for expired entries; an expired
    /// entry is evicted as a side effect of the lookup.
    pub fn get(&self, id: &str) -> Option<PendingItem> {
        let item = self.items.get(id).map(|entry| entry.clone())?;
        if item.is_expired(self.ttl_minutes) {
            self.items.remove(id);
            debug!(id = %id, "expired pending item evicted on lookup");
            return None;
        }
        Some(item)
    }

    /// Remove an item by id. Returns whether a deletion occurred.
    pub fn remove(&self, id: &str) -> bool {
        self.items.remove(id).is_some()
    }

    /// All live items, evicting any found expired during the scan.
    pub fn list_pending(&self) -> Vec<PendingItem> {
        let mut live = Vec::new();
        let mut expired = Vec::new();
        for entry in self.items.iter() {
            if entry.is_expired(self.ttl_minutes) {
                expired.push(entry.key().clone());
            } else {
                live.push(entry.clone());
            }
        }
        self.evict(&expired);
        live
    }

    /// Remove every expired item. Returns the number removed.
    pub fn cleanup_expired(&self) -> usize {
        let expired: Vec<String> = self
            .items
            .iter()
            .filter(|entry| entry.is_expired(self.ttl_minutes))
            .map(|entry| entry.key().clone())
            .collect();
        self.evict(&expired);
        expired.len()
    }

    /// Number of live items, evicting any found expired during the scan.
    pub fn count(&self) -> usize {
        self.cleanup_expired();
        self.items.len()
    }

    fn evict(&self, ids: &[String]) {
        for id in ids {
            self.items.remove(id);
        }
        if !ids.is_empty() {
            debug!(count = ids.len(), "expired pending items evicted");
        }
    }
}

impl Default for PendingStore {
    fn default() -> Self {
        Self::with_ttl(FALLBACK_PENDING_TTL_MINUTES)
    }
}

/// Fresh collision-improbable id: `pending-` plus twelve hex characters.
fn generate_pending_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("{PENDING_ID_PREFIX}{}", &hex[..PENDING_ID_HEX_LEN])
}
