//! Cache Entry Module
//!
//! Defines the structure for individual cache entries.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry: an opaque byte payload and its creation time.
///
/// The creation stamp is monotonic (`Instant`, not wall-clock time) so entry
/// ages cannot jump backwards or forwards with system clock adjustments. An
/// entry never expires on its own; the background reaper removes it once its
/// age reaches the cache's time-to-live.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// Creation timestamp, set once at insertion and never updated
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Returns the entry's age as observed at `now`.
    ///
    /// Saturates to zero if `now` precedes `created_at`.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry is stale at `now` for the given time-to-live.
    ///
    /// Boundary condition: an entry is stale when its age is greater than
    /// *or equal to* the TTL. Once the full TTL duration has elapsed the
    /// entry is immediately eligible for reclamation.
    ///
    /// Taking `now` as a parameter lets the reaper evaluate every entry in a
    /// sweep against one consistent instant, and makes the boundary testable.
    pub fn is_stale_at(&self, now: Instant, ttl: Duration) -> bool {
        self.age_at(now) >= ttl
    }
}
