//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache time-to-live in seconds; also the reclamation period
    pub cache_ttl_secs: u64,
    /// Per-request HTTP timeout in seconds
    pub http_timeout_secs: u64,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

const DEFAULT_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache TTL / reclamation period in seconds (default: 300)
    /// - `HTTP_TIMEOUT` - HTTP request timeout in seconds (default: 30)
    /// - `USER_AGENT` - User-Agent header (default: "restcache/<version>")
    ///
    /// Unparseable numeric values fall back to the defaults. A zero `CACHE_TTL`
    /// is passed through and rejected when the cache is constructed.
    pub fn from_env() -> Self {
        Self {
            cache_ttl_secs: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            http_timeout_secs: env::var("HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            user_agent: env::var("USER_AGENT").unwrap_or_else(|_| default_user_agent()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("restcache/{}", env!("CARGO_PKG_VERSION"))
}
