//! Error types for the CLI.
//!
//! Configuration failures stay as [`ConfigError`](crate::config::ConfigError)
//! and are reported by `main` before any command runs.

use thiserror::Error;

/// Command execution error
#[derive(Debug, Error)]
pub enum CliError {
    /// Pricing engine rejected the request
    #[error("Pricing error: {0}")]
    Pricing(#[from] lookback_pricing::PricingError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Output serialisation failure
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// CLI result alias
pub type Result<T> = std::result::Result<T, CliError>;
