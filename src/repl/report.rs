//! Stats Report Module
//!
//! JSON-printable snapshot of the cache statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::CacheStats;

// == Stats Report ==
/// Point-in-time view of the cache statistics, printed by the `stats`
/// command as pretty JSON.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals
    pub misses: u64,
    /// Number of entries removed by the background reaper
    pub reclaimed: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// hits / (hits + misses), or 0.0 with no requests
    pub hit_rate: f64,
    /// When this report was generated
    pub generated_at: DateTime<Utc>,
}

impl StatsReport {
    /// Builds a report from a stats snapshot, stamped with the current time.
    pub fn from_stats(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            reclaimed: stats.reclaimed,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            generated_at: Utc::now(),
        }
    }
}
