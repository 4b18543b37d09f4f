//! RestCache - An interactive REST API client with a time-bounded cache
//!
//! Fetches URLs over HTTP and serves repeated requests from an in-memory
//! cache whose entries are reclaimed by a background task.

mod cache;
mod client;
mod config;
mod error;
mod repl;
mod tasks;

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache::Cache;
use client::CachedClient;
use config::Config;
use repl::Repl;

/// Main entry point for the RestCache session.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache, which starts its background reaper
/// 4. Create the cached HTTP client
/// 5. Run the interactive session until exit or Ctrl+C
/// 6. Stop the reaper on the way out
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "restcache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting RestCache");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, http_timeout={}s, user_agent={}",
        config.cache_ttl_secs, config.http_timeout_secs, config.user_agent
    );

    // Create the cache; this also starts the background reaper
    let cache = Cache::new(Duration::from_secs(config.cache_ttl_secs))
        .context("failed to create cache")?;
    info!("Cache initialized, background reaper running");

    // Create the cached HTTP client sharing that cache
    let client = CachedClient::new(cache.clone(), &config)
        .context("failed to create HTTP client")?;

    // Run the interactive session until exit or Ctrl+C
    let repl = Repl::new(client, cache.clone());
    tokio::select! {
        result = repl.run() => {
            result.context("session failed")?;
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down...");
        }
    }

    // Stop the reaper task
    cache.shutdown();
    info!("Shutdown complete");

    Ok(())
}
