//! Reclamation Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that periodically reclaims stale cache entries.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps, so the first sweep happens one interval after spawning.
/// Each sweep acquires the write lock once and removes every entry whose age
/// has reached the store's TTL, judged against a single timestamp.
///
/// # Arguments
/// * `store` - Arc<RwLock<CacheStore>> shared reference to the store
/// * `interval` - Time between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(Duration::from_secs(300))));
/// let reaper_handle = spawn_reaper_task(store.clone(), Duration::from_secs(300));
/// // Later, during shutdown:
/// reaper_handle.abort();
/// ```
pub fn spawn_reaper_task(store: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting reclamation task with interval of {:?}", interval);

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and sweep stale entries
            let removed = {
                let mut store_guard = store.write().await;
                store_guard.reclaim_stale()
            };

            // Log sweep statistics
            if removed > 0 {
                info!("Reclamation: removed {} stale entries", removed);
            } else {
                debug!("Reclamation: no stale entries found");
            }
        }
    })
}
