//! Replayable event types
//!
//! Events are produced upstream by the capture pipeline and handed to sinks
//! one at a time. The sink only reads them.

use serde::{Deserialize, Serialize};

/// One captured search query to replay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleSearchEvent {
    query_string: String,
}

impl SimpleSearchEvent {
    /// Create an event from a raw query string
    pub fn new(query_string: impl Into<String>) -> Self {
        Self {
            query_string: query_string.into(),
        }
    }

    /// The raw query string, exactly as captured
    pub fn query_string(&self) -> &str {
        &self.query_string
    }
}
