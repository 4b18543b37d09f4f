//! Error types for restcache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == RestCache Error Enum ==
/// Unified error type for the cache client.
///
/// Cache reads and writes themselves are total operations and never fail;
/// errors arise only from construction-time misconfiguration, the HTTP
/// fetch layer, and REPL command usage.
#[derive(Error, Debug)]
pub enum RestCacheError {
    /// Cache constructed with a zero reclamation interval
    #[error("Invalid cache interval: {0}")]
    InvalidInterval(String),

    /// HTTP request failed (transport error or non-success status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A REPL command was invoked with the wrong arguments
    #[error("Invalid usage: {0}")]
    Usage(String),

    /// Reading from or writing to the terminal failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding of a report failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache client.
pub type Result<T> = std::result::Result<T, RestCacheError>;
