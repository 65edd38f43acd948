//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching quotes from upstream sources.
///
/// Every variant except [`AllProvidersFailed`](Self::AllProvidersFailed)
/// describes a single source being unavailable; the provider chain recovers
/// from those by advancing to the next source. `AllProvidersFailed` is the
/// chain's own terminal error and is recovered by the simulated quote source,
/// so none of these ever reach the inbound API.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider returned a non-success status or an unparseable body.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider responded successfully but with zero usable quotes.
    #[error("Empty response: {provider}")]
    EmptyResponse {
        /// The provider that returned no usable data
        provider: String,
    },

    /// Every provider in the chain was tried and all failed.
    #[error("All providers failed")]
    AllProvidersFailed,

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Classify a failed reqwest call, folding timeouts into their own
    /// variant so the chain can log them distinctly.
    pub fn from_request(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Network(err)
        }
    }
}
