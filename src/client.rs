//! Cached HTTP Client Module
//!
//! Fetch-through client that serves repeated GET requests from the cache.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::Result;

// == Fetched Response ==
/// Response body returned by [`CachedClient::fetch`], tagged with its origin.
#[derive(Debug, Clone)]
pub struct Fetched {
    /// Raw response body
    pub body: Vec<u8>,
    /// True when the body came from the cache rather than the network
    pub from_cache: bool,
}

// == Cached Client ==
/// HTTP GET client that consults the cache before the network.
///
/// Responses are cached under the full request URL, so two requests are the
/// same request only when their URLs match byte for byte. Only successful
/// responses are stored; error statuses surface as errors and leave the cache
/// untouched, so a later retry goes back to the network.
#[derive(Debug, Clone)]
pub struct CachedClient {
    http: Client,
    cache: Cache,
}

impl CachedClient {
    // == Constructor ==
    /// Creates a client that shares `cache` and applies the configured
    /// request timeout and user agent.
    pub fn new(cache: Cache, config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { http, cache })
    }

    // == Fetch ==
    /// Fetches `url`, serving from the cache when possible.
    ///
    /// On a miss the body is fetched over HTTP, stored under `url`, and
    /// returned. A non-success status is reported as an error and nothing
    /// is cached for it.
    pub async fn fetch(&self, url: &str) -> Result<Fetched> {
        if let Some(body) = self.cache.get(url).await {
            debug!("Cache hit for {}", url);
            return Ok(Fetched {
                body,
                from_cache: true,
            });
        }

        debug!("Cache miss for {}", url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?.to_vec();

        self.cache.add(url.to_string(), body.clone()).await;
        info!("Fetched {} ({} bytes)", url, body.len());

        Ok(Fetched {
            body,
            from_cache: false,
        })
    }
}
