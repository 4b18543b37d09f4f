//! Cache Handle Module
//!
//! Cloneable async facade over the store, owning the reaper task lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::cache::{CacheStats, CacheStore};
use crate::error::{RestCacheError, Result};
use crate::tasks::spawn_reaper_task;

// == Reaper Guard ==
/// Owns the reaper's join handle and aborts it when the last clone of the
/// owning [`Cache`] is dropped.
#[derive(Debug)]
struct ReaperGuard {
    task: JoinHandle<()>,
}

impl Drop for ReaperGuard {
    fn drop(&mut self) {
        self.task.abort();
    }
}

// == Cache ==
/// Cloneable, task-safe cache handle.
///
/// All clones share one store and one background reaper. The reaper wakes
/// every `interval`, takes the write lock once, and removes every entry whose
/// age has reached `interval`. Reads never remove anything, so a value stays
/// retrievable from the moment it is added until the sweep that reclaims it,
/// somewhere between one and two intervals after creation.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    reaper: Arc<ReaperGuard>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache and starts its reaper. Must be called from within a
    /// Tokio runtime.
    ///
    /// `interval` is both the entry TTL and the sweep period. A zero interval
    /// is rejected: it would make every entry stale at birth and spin the
    /// reaper without sleeping.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(RestCacheError::InvalidInterval(
                "interval must be greater than zero".to_string(),
            ));
        }

        let store = Arc::new(RwLock::new(CacheStore::new(interval)));
        let task = spawn_reaper_task(Arc::clone(&store), interval);

        Ok(Self {
            store,
            reaper: Arc::new(ReaperGuard { task }),
        })
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous value.
    pub async fn add(&self, key: String, value: Vec<u8>) {
        self.store.write().await.add(key, value);
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`, if present.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.write().await.get(key)
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Length ==
    /// Returns the number of entries currently held, stale or not.
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Shutdown ==
    /// Stops the background reaper.
    ///
    /// Entries already present stay readable; they are simply never swept
    /// again. Safe to call more than once.
    pub fn shutdown(&self) {
        debug!("Cache shutdown requested, stopping reaper task");
        self.reaper.task.abort();
    }
}
