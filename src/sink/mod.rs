//! Sink contract for replayed events
//! Provides a pluggable architecture for delivering replayed events to
//! external systems and reporting per-event outcome to the player.

use crate::config::PlayerConfig;
use crate::errors::Result;

pub mod es_query;

pub use es_query::SimpleQueryEsSink;

/// Lifecycle contract implemented by every output adapter
///
/// The player calls `init` once per adapter instance, then `write` once
/// per replayed event, potentially from many worker threads at once.
pub trait Sink<E>: Send + Sync {
    /// Read and validate adapter settings from the player configuration
    ///
    /// Fails with a configuration error when a required setting is missing
    /// or blank; a failed adapter must not be used.
    fn init(&mut self, config: &PlayerConfig) -> Result<()>;

    /// Replay one event, blocking until the attempt completes
    ///
    /// Returns `false` for both a not-found response and a transport
    /// failure; expected failures are logged, never raised.
    fn write(&self, event: &E) -> bool;
}
