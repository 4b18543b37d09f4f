//! RestCache - An interactive REST API client with a time-bounded cache
//!
//! Fetches URLs over HTTP and serves repeated requests from an in-memory
//! cache whose entries are reclaimed by a background task.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::CachedClient;
pub use config::Config;
pub use repl::Repl;
pub use tasks::spawn_reaper_task;
