//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with time-bounded reclamation.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key/value store whose entries carry creation stamps and are removed by
/// periodic reclamation rather than on read.
///
/// The store itself is unsynchronized. The [`Cache`](crate::cache::Cache)
/// handle wraps it in an `Arc<RwLock<..>>` so that callers and the background
/// reaper serialize through the same lock.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age at which an entry becomes eligible for reclamation
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates a new CacheStore whose entries go stale after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Stores a value under `key`, stamped with the current time.
    ///
    /// Always succeeds: empty keys and empty values are legal. Adding to an
    /// existing key replaces the previous value and restarts its lifetime.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Looks up `key` and returns a copy of its bytes if present.
    ///
    /// Presence is the only criterion: an entry past its TTL that the reaper
    /// has not yet swept is still returned. Removal happens exclusively in
    /// [`reclaim_stale_at`](CacheStore::reclaim_stale_at).
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reclaim Stale ==
    /// Removes every entry that is stale as of `now`.
    ///
    /// The same timestamp is applied to the whole sweep, so entries created
    /// together are reclaimed together. Returns the number removed.
    pub fn reclaim_stale_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale_at(now, ttl));
        let removed = before - self.entries.len();

        if removed > 0 {
            self.stats.record_reclaimed(removed as u64);
        }
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    /// Removes every entry that is stale right now.
    pub fn reclaim_stale(&mut self) -> usize {
        self.reclaim_stale_at(Instant::now())
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, stale or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
