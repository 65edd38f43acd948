//! Ordered fallback chain over quote providers.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::SourceQuote;
use crate::provider::QuoteProvider;

/// Strictly ordered fallback chain.
///
/// Providers are tried sequentially in registration order (first registered
/// = most preferred) and never concurrently: only one winner is needed, and
/// speculative parallel calls would defeat each provider's own rate-limit
/// pacing. The first provider that yields at least one usable quote wins
/// outright; partial results are not merged across providers, so a ticker
/// missing from the winner's response stays missing rather than falling
/// through to the next tier.
pub struct ProviderChain {
    providers: Vec<Arc<dyn QuoteProvider>>,
}

impl ProviderChain {
    pub fn new(providers: Vec<Arc<dyn QuoteProvider>>) -> Self {
        Self { providers }
    }

    /// Identifiers of the registered providers, in priority order.
    pub fn provider_ids(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.id()).collect()
    }

    /// Try each provider in order, returning the first usable quote map
    /// together with the winning provider's id.
    ///
    /// Fails with [`MarketDataError::AllProvidersFailed`] only when every
    /// provider errored or returned nothing usable.
    pub async fn fetch_first_available(
        &self,
        tickers: &[String],
    ) -> Result<(&'static str, HashMap<String, SourceQuote>), MarketDataError> {
        for provider in &self.providers {
            match provider.fetch_quotes(tickers).await {
                Ok(quotes) if quotes.values().any(SourceQuote::is_usable) => {
                    debug!(
                        "Provider '{}' returned {} quotes for {} tickers",
                        provider.id(),
                        quotes.len(),
                        tickers.len()
                    );
                    return Ok((provider.id(), quotes));
                }
                Ok(_) => {
                    warn!(
                        "Provider '{}' returned no usable quotes. Trying next.",
                        provider.id()
                    );
                }
                Err(e) => {
                    warn!("Provider '{}' failed: {}. Trying next.", provider.id(), e);
                }
            }
        }
        Err(MarketDataError::AllProvidersFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test double returning a fixed outcome and counting invocations.
    struct StubProvider {
        id: &'static str,
        outcome: Outcome,
        calls: AtomicUsize,
    }

    enum Outcome {
        Quotes(Vec<SourceQuote>),
        Unavailable,
    }

    impl StubProvider {
        fn with_quotes(id: &'static str, quotes: Vec<SourceQuote>) -> Arc<Self> {
            Arc::new(Self {
                id,
                outcome: Outcome::Quotes(quotes),
                calls: AtomicUsize::new(0),
            })
        }

        fn unavailable(id: &'static str) -> Arc<Self> {
            Arc::new(Self {
                id,
                outcome: Outcome::Unavailable,
                calls: AtomicUsize::new(0),
            })
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuoteProvider for StubProvider {
        fn id(&self) -> &'static str {
            self.id
        }

        async fn fetch_quotes(
            &self,
            _tickers: &[String],
        ) -> Result<HashMap<String, SourceQuote>, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Outcome::Quotes(quotes) => Ok(quotes
                    .iter()
                    .map(|q| (q.symbol.clone(), q.clone()))
                    .collect()),
                Outcome::Unavailable => Err(MarketDataError::ProviderError {
                    provider: self.id.to_string(),
                    message: "HTTP 503".to_string(),
                }),
            }
        }
    }

    fn tickers(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_first_provider_wins_and_short_circuits() {
        let first = StubProvider::with_quotes(
            "FIRST",
            vec![SourceQuote::new("AAPL", dec!(120), dec!(25))],
        );
        let second =
            StubProvider::with_quotes("SECOND", vec![SourceQuote::new("AAPL", dec!(999), dec!(1))]);
        let chain = ProviderChain::new(vec![first.clone(), second.clone()]);

        let (winner, quotes) = chain
            .fetch_first_available(&tickers(&["AAPL"]))
            .await
            .unwrap();

        assert_eq!(winner, "FIRST");
        assert_eq!(quotes["AAPL"].price, Some(dec!(120)));
        assert_eq!(first.call_count(), 1);
        assert_eq!(second.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failing_provider_falls_through() {
        let first = StubProvider::unavailable("FIRST");
        let second =
            StubProvider::with_quotes("SECOND", vec![SourceQuote::new("AAPL", dec!(120), dec!(25))]);
        let chain = ProviderChain::new(vec![first.clone(), second.clone()]);

        let (winner, _) = chain
            .fetch_first_available(&tickers(&["AAPL"]))
            .await
            .unwrap();

        assert_eq!(winner, "SECOND");
        assert_eq!(first.call_count(), 1);
        assert_eq!(second.call_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_map_counts_as_unavailable() {
        let first = StubProvider::with_quotes("FIRST", vec![]);
        let second =
            StubProvider::with_quotes("SECOND", vec![SourceQuote::new("AAPL", dec!(120), dec!(25))]);
        let chain = ProviderChain::new(vec![first, second]);

        let (winner, _) = chain
            .fetch_first_available(&tickers(&["AAPL"]))
            .await
            .unwrap();
        assert_eq!(winner, "SECOND");
    }

    #[tokio::test]
    async fn test_priceless_quotes_count_as_unavailable() {
        let priceless = SourceQuote {
            symbol: "AAPL".to_string(),
            price: None,
            pe_ratio: Some(dec!(25)),
        };
        let first = StubProvider::with_quotes("FIRST", vec![priceless]);
        let chain = ProviderChain::new(vec![first]);

        let err = chain
            .fetch_first_available(&tickers(&["AAPL"]))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketDataError::AllProvidersFailed));
    }

    #[tokio::test]
    async fn test_exhausted_chain_reports_all_failed() {
        let chain = ProviderChain::new(vec![
            StubProvider::unavailable("FIRST"),
            StubProvider::unavailable("SECOND"),
        ]);

        let err = chain
            .fetch_first_available(&tickers(&["AAPL"]))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketDataError::AllProvidersFailed));
    }

    #[tokio::test]
    async fn test_empty_chain_reports_all_failed() {
        let chain = ProviderChain::new(vec![]);
        let err = chain
            .fetch_first_available(&tickers(&["AAPL"]))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketDataError::AllProvidersFailed));
    }
}
