//! Shared HTTP transport with pooled connections
//!
//! One `TransportPool` is built at process start and shared by every sink
//! instance and every replay worker thread. The underlying client reuses
//! connections across requests and is safe for unsynchronized concurrent
//! use; it is never reconfigured after construction and lives for the
//! process lifetime.

use crate::errors::Result;
use reqwest::blocking::{Client, Response};
use std::time::Duration;

/// Default bound on idle pooled connections per host
pub const DEFAULT_MAX_IDLE_PER_HOST: usize = 8;

/// Builder for [`TransportPool`]
#[derive(Debug, Clone)]
pub struct TransportPoolBuilder {
    max_idle_per_host: usize,
    timeout: Option<Duration>,
}

impl Default for TransportPoolBuilder {
    fn default() -> Self {
        Self {
            max_idle_per_host: DEFAULT_MAX_IDLE_PER_HOST,
            timeout: None,
        }
    }
}

impl TransportPoolBuilder {
    /// Bound the number of idle pooled connections kept per host
    pub fn max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }

    /// Set a per-request timeout
    ///
    /// No timeout is applied when this is left unset: a replayed request
    /// blocks its worker thread until the exchange completes or fails.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the pool
    pub fn build(self) -> Result<TransportPool> {
        let client = Client::builder()
            .pool_max_idle_per_host(self.max_idle_per_host)
            .timeout(self.timeout)
            .build()?;
        Ok(TransportPool { client })
    }
}

/// Process-wide, thread-safe blocking HTTP client
#[derive(Debug, Clone)]
pub struct TransportPool {
    client: Client,
}

impl TransportPool {
    /// Start building a pool
    pub fn builder() -> TransportPoolBuilder {
        TransportPoolBuilder::default()
    }

    /// Issue a blocking GET request
    pub fn get(&self, url: &str) -> reqwest::Result<Response> {
        self.client.get(url).send()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_build() {
        let pool = TransportPool::builder().build();
        assert!(pool.is_ok());
    }

    #[test]
    fn builder_accepts_pool_and_timeout_settings() {
        let pool = TransportPool::builder()
            .max_idle_per_host(2)
            .timeout(Some(Duration::from_secs(5)))
            .build();
        assert!(pool.is_ok());
    }
}
