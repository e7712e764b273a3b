//! Configuration error types

use thiserror::Error;

use super::server::MAX_REQUEST_TIMEOUT_SECS;

/// Errors raised while building an [`AppConfig`](super::AppConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// A loaded value that cannot be served with
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("storage.data_dir must be set for the file backend")]
    EmptyDataDir,

    #[error("server.port must be non-zero")]
    InvalidPort,

    #[error("server.request_timeout_secs must be between 1 and {max}, got {secs}", max = MAX_REQUEST_TIMEOUT_SECS)]
    TimeoutOutOfRange { secs: u64 },

    #[error("Cannot bind to '{0}'")]
    InvalidBindAddress(String),
}
