//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the cache is alive.
//!
//! # Tasks
//! - Reclamation: Removes stale cache entries at the configured interval

mod reaper;

pub use reaper::spawn_reaper_task;
