//! Output adapter for a query-replay player targeting Elasticsearch
//!
//! A player replays previously captured search-query events against a live
//! cluster. This crate provides the sink side of that pipeline: the
//! [`Sink`] lifecycle contract, the [`SimpleQueryEsSink`] adapter that
//! re-executes queries over HTTP, the shared [`TransportPool`], and the
//! [`PlayerConfig`] key/value source the orchestrator hands to `init`.

pub mod config;
pub mod errors;
pub mod event;
pub mod sink;
pub mod transport;

pub use config::PlayerConfig;
pub use errors::{PlayerError, Result};
pub use event::SimpleSearchEvent;
pub use sink::{SimpleQueryEsSink, Sink};
pub use transport::TransportPool;
