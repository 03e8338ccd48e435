//! In-memory TTL cache for upstream-derived responses.
//!
//! [`ResponseCache`] stores serialized response views keyed by a
//! request-shaped string. Entries expire after a fixed TTL; expiry is
//! lazy on read, with a periodic [`ResponseCache::purge_expired`] sweep
//! spawned by the server bootstrap to reclaim memory for keys nobody
//! asks about again.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

/// A cached value and its deadline.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: serde_json::Value,
    expires_at: Instant,
}

/// Concurrent TTL cache for JSON response views.
///
/// # Concurrency
///
/// - Reads of live entries take only the outer read lock.
/// - A read that finds an expired entry upgrades to a write lock to
///   remove it.
/// - Writes are serialized on the outer map.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl ResponseCache {
    /// Creates an empty cache whose entries live for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the value under `key` if present and not expired.
    ///
    /// Expired entries are removed on the way out.
    pub async fn get(&self, key: &str) -> Option<serde_json::Value> {
        let now = Instant::now();
        {
            let map = self.entries.read().await;
            match map.get(key) {
                Some(entry) if entry.expires_at > now => return Some(entry.value.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // Entry exists but is expired; drop it under the write lock.
        let mut map = self.entries.write().await;
        if let Some(entry) = map.get(key)
            && entry.expires_at <= now
        {
            map.remove(key);
        }
        None
    }

    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its TTL.
    pub async fn put(&self, key: impl Into<String>, value: serde_json::Value) {
        let entry = CacheEntry {
            value,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(key.into(), entry);
    }

    /// Removes every expired entry, returning how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let mut map = self.entries.write().await;
        let before = map.len();
        map.retain(|_, entry| entry.expires_at > now);
        before - map.len()
    }

    /// Returns the number of entries, including not-yet-purged expired
    /// ones.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_returns_stored_value() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.put("k", serde_json::json!({"a": 1})).await;

        let value = cache.get("k").await;
        assert_eq!(value, Some(serde_json::json!({"a": 1})));
    }

    #[tokio::test]
    async fn get_misses_on_unknown_key() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        assert!(cache.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn expired_entries_are_dropped_on_read() {
        let cache = ResponseCache::new(Duration::from_millis(10));
        cache.put("k", serde_json::json!(1)).await;

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert!(cache.get("k").await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn put_replaces_and_restarts_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(60));
        cache.put("k", serde_json::json!(1)).await;
        cache.put("k", serde_json::json!(2)).await;

        assert_eq!(cache.get("k").await, Some(serde_json::json!(2)));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn purge_removes_only_expired_entries() {
        let cache = ResponseCache::new(Duration::from_millis(20));
        cache.put("old", serde_json::json!(1)).await;
        tokio::time::sleep(Duration::from_millis(40)).await;
        cache.put("fresh", serde_json::json!(2)).await;

        let removed = cache.purge_expired().await;
        assert_eq!(removed, 1);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("fresh").await.is_some());
    }
}
