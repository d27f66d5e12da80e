//! Process-local response cache with a fixed time-to-live.
//!
//! Entries are never evicted; a stale entry stays until the next successful
//! write for the same key overwrites it.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug)]
struct CacheEntry<T> {
    payload: T,
    stored_at: Instant,
}

#[derive(Debug)]
pub struct ResponseCache<T> {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
}

impl<T: Clone> ResponseCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cached payload for `key` if it was stored less than one TTL ago.
    pub fn get(&self, key: &str) -> Option<T> {
        let entries = self.lock();
        let entry = entries.get(key)?;
        (entry.stored_at.elapsed() < self.ttl).then(|| entry.payload.clone())
    }

    pub fn insert(&self, key: impl Into<String>, payload: T) {
        self.lock().insert(
            key.into(),
            CacheEntry {
                payload,
                stored_at: Instant::now(),
            },
        );
    }

    /// Number of stored keys, fresh or stale.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<T>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}
