//! Elasticsearch query sink
//!
//! Replays captured search queries as blocking GET requests against a live
//! Elasticsearch cluster, one request per event, over the shared transport
//! pool.

use crate::config::PlayerConfig;
use crate::errors::Result;
use crate::event::SimpleSearchEvent;
use crate::sink::Sink;
use crate::transport::TransportPool;
use reqwest::StatusCode;
use std::io;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Configuration key for the cluster base URL
pub const ES_BASE_URL_KEY: &str = "simpleEsSink.esBaseUrl";
/// Configuration key for the target index name
pub const ES_INDEX_NAME_KEY: &str = "simpleEsSink.indexName";

/// Build the search request URL for a query
///
/// The index name and query string are embedded verbatim, with no
/// percent-encoding; upstream producers are responsible for URL-safe
/// content.
pub fn search_url(base_url: &str, index_name: &str, query_string: &str) -> String {
    format!("{base_url}/{index_name}/_search?q={query_string}")
}

/// Sink that re-executes captured search queries against Elasticsearch
///
/// Holds the target base URL and index name after `init`; all instances
/// share one [`TransportPool`].
pub struct SimpleQueryEsSink {
    transport: Arc<TransportPool>,
    es_base_url: Option<String>,
    index_name: Option<String>,
}

impl SimpleQueryEsSink {
    /// Create an uninitialized sink backed by the shared transport pool
    pub fn new(transport: Arc<TransportPool>) -> Self {
        Self {
            transport,
            es_base_url: None,
            index_name: None,
        }
    }
}

impl Sink<SimpleSearchEvent> for SimpleQueryEsSink {
    fn init(&mut self, config: &PlayerConfig) -> Result<()> {
        let es_base_url = config.get_required(ES_BASE_URL_KEY)?;
        let index_name = config.get_required(ES_INDEX_NAME_KEY)?;
        self.es_base_url = Some(es_base_url.to_string());
        self.index_name = Some(index_name.to_string());
        Ok(())
    }

    fn write(&self, event: &SimpleSearchEvent) -> bool {
        let (Some(es_base_url), Some(index_name)) = (&self.es_base_url, &self.index_name) else {
            error!("write called on an uninitialized sink");
            return false;
        };
        let url = search_url(es_base_url, index_name, event.query_string());
        info!("Sending ES search event GET {}", url);

        let mut response = match self.transport.get(&url) {
            Ok(response) => response,
            Err(e) => {
                error!("Sending event failed: {}", e);
                return false;
            }
        };

        let status = response.status();
        // Drain the body on every path, including 404, so the connection
        // always goes back to the pool.
        if let Err(e) = io::copy(&mut response, &mut io::sink()) {
            error!("Reading response body failed: {}", e);
            return false;
        }
        debug!("Event sent, status {}", status);

        // Only 404 counts as a miss; every other status, 4xx/5xx included,
        // keeps the original success policy.
        status != StatusCode::NOT_FOUND
    }
}
