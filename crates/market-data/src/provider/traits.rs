//! Quote provider trait definition.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::SourceQuote;

/// Trait for quote providers.
///
/// Implement this trait to add support for a new quote source; the provider
/// chain tries implementations in the order they were registered, so adding a
/// source means appending to the chain, not branching logic.
///
/// Contract:
/// - The returned map is keyed by the caller's canonical tickers. Any
///   source-specific symbol translation (exchange-suffix rewriting and the
///   like) is the provider's own business and must be reversed before
///   returning.
/// - A requested ticker missing from the upstream response is a partial
///   miss: leave it out of the map (or return it without a price), never
///   fail the whole call for it.
/// - Fail with a [`MarketDataError`] on non-success status, an unparseable
///   body, a timeout, or a response that claimed success but carried zero
///   usable quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "YAHOO".
    ///
    /// Used for logging and recorded as quote provenance.
    fn id(&self) -> &'static str;

    /// Fetch quotes for the given canonical tickers.
    async fn fetch_quotes(
        &self,
        tickers: &[String],
    ) -> Result<HashMap<String, SourceQuote>, MarketDataError>;
}
