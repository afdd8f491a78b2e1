//! Response cache used by the HTTP gateway.
//!
//! Entries are keyed by the full request URL. The default cache keeps a
//! single entry: the most recent successful response.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use lru::LruCache;
use serde::{Deserialize, Serialize};

/// A successful response as it was received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedResponse {
    pub url: String,
    pub body: serde_json::Value,
    pub headers: HashMap<String, String>,
    pub status_code: u16,
    pub fetched_at: DateTime<Utc>,
}

impl CachedResponse {
    fn is_older_than(&self, max_age: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.fetched_at);
        age.to_std().is_ok_and(|age| age > max_age)
    }
}

/// Bounded least-recently-used response cache.
///
/// A hit makes the entry the most recent; inserting beyond capacity drops
/// the least recently used entry. Storage grows with the entries actually
/// held, not with the configured capacity.
#[derive(Debug)]
pub struct ResponseCache {
    capacity: usize,
    max_age: Option<Duration>,
    entries: Mutex<LruCache<String, CachedResponse>>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ResponseCache {
    /// Create a cache holding up to `capacity` responses. 0 disables it.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            max_age: None,
            entries: Mutex::new(LruCache::unbounded()),
        }
    }

    pub fn disabled() -> Self {
        Self::new(0)
    }

    /// Entries older than `max_age` are treated as misses.
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn entries(&self) -> MutexGuard<'_, LruCache<String, CachedResponse>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the fresh entry for `url`, if any.
    pub fn lookup(&self, url: &str) -> Option<CachedResponse> {
        let mut entries = self.entries();
        let stale = self
            .max_age
            .is_some_and(|max_age| entries.peek(url).is_some_and(|e| e.is_older_than(max_age)));
        if stale {
            entries.pop(url);
            return None;
        }
        entries.get(url).cloned()
    }

    /// Insert or replace the entry for `response.url`.
    pub fn store(&self, response: CachedResponse) {
        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries();
        entries.put(response.url.clone(), response);
        while entries.len() > self.capacity {
            entries.pop_lru();
        }
    }

    /// The most recently stored or hit entry.
    pub fn last(&self) -> Option<CachedResponse> {
        self.entries().iter().next().map(|(_, entry)| entry.clone())
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(url: &str, n: i64) -> CachedResponse {
        CachedResponse {
            url: url.into(),
            body: serde_json::json!({ "n": n }),
            headers: HashMap::new(),
            status_code: 200,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn single_slot_keeps_most_recent() {
        let cache = ResponseCache::default();
        assert!(cache.is_empty());

        cache.store(response("https://a", 1));
        cache.store(response("https://b", 2));

        assert_eq!(cache.len(), 1);
        assert!(cache.lookup("https://a").is_none());
        assert_eq!(cache.lookup("https://b").unwrap().body["n"], 2);
        assert_eq!(cache.last().unwrap().url, "https://b");
    }

    #[test]
    fn store_replaces_same_url() {
        let cache = ResponseCache::new(4);
        cache.store(response("https://a", 1));
        cache.store(response("https://a", 2));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup("https://a").unwrap().body["n"], 2);
    }

    #[test]
    fn hit_refreshes_recency() {
        let cache = ResponseCache::new(2);
        cache.store(response("https://a", 1));
        cache.store(response("https://b", 2));

        // Touch `a` so that `b` is evicted next.
        assert!(cache.lookup("https://a").is_some());
        assert_eq!(cache.last().unwrap().url, "https://a");

        cache.store(response("https://c", 3));
        assert!(cache.lookup("https://b").is_none());
        assert!(cache.lookup("https://a").is_some());
        assert!(cache.lookup("https://c").is_some());
    }

    #[test]
    fn stale_entries_are_misses() {
        let cache = ResponseCache::new(1).with_max_age(Duration::from_secs(60));
        let mut old = response("https://a", 1);
        old.fetched_at = Utc::now() - chrono::Duration::seconds(120);
        cache.store(old);

        assert!(cache.lookup("https://a").is_none());
        assert!(cache.is_empty());

        cache.store(response("https://a", 2));
        assert!(cache.lookup("https://a").is_some());
    }

    #[test]
    fn disabled_cache_stores_nothing() {
        let cache = ResponseCache::disabled();
        cache.store(response("https://a", 1));
        assert!(cache.is_empty());
        assert!(cache.last().is_none());
    }

    #[test]
    fn clear_empties_cache() {
        let cache = ResponseCache::new(3);
        cache.store(response("https://a", 1));
        cache.store(response("https://b", 2));
        cache.clear();
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let cache = ResponseCache::new(usize::MAX / 2);
        assert_eq!(cache.capacity(), usize::MAX / 2);

        cache.store(response("https://a", 1));
        cache.store(response("https://b", 2));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.last().unwrap().url, "https://b");
    }
}
