//! Error types for the query replayer
//! Provides structured error handling using thiserror for better error reporting

use thiserror::Error;

/// Main error type for the query replayer
#[derive(Error, Debug)]
pub enum PlayerError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File/IO related errors
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// HTTP client construction errors
    #[error("HTTP client error")]
    Http(#[from] reqwest::Error),

    /// Generic error for compatibility
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, PlayerError>;

impl PlayerError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
