//! Core error types.
//!
//! These only surface at startup (loading and validating the watchlist);
//! the running pipeline is infallible by design.

use thiserror::Error;

use tickerdeck_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Input validation failed: {0}")]
    Validation(String),

    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}
