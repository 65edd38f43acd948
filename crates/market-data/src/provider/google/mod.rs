//! Google Finance quote provider.
//!
//! Google has no public JSON API, so this provider scrapes the quote page
//! one symbol at a time and pulls the price out of the known price node.
//! Scraping is brittle: the CSS class (`YMlKec fxKbKc`) has been stable for
//! a long time but can change without notice. The page offers no reliably
//! parseable P/E, so quotes come back price-only.
//!
//! Requests are intentionally serialized with a randomized delay between
//! them; Google throttles aggressively when hit at machine speed.

use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use rand::Rng;
use regex::Regex;
use reqwest::Client;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::headers::browser_headers;
use crate::models::SourceQuote;
use crate::provider::traits::QuoteProvider;

const PROVIDER_ID: &str = "GOOGLE";
const QUOTE_URL: &str = "https://www.google.com/finance/quote";

/// The node Google renders the current price into.
const PRICE_PATTERN: &str = r#"class="YMlKec fxKbKc"[^>]*>([^<]+)<"#;

/// Bounds for the randomized pause between per-symbol page loads.
#[derive(Clone, Copy, Debug)]
pub struct ScrapeDelay {
    pub floor: Duration,
    pub ceiling: Duration,
}

impl Default for ScrapeDelay {
    fn default() -> Self {
        Self {
            floor: Duration::from_millis(500),
            ceiling: Duration::from_millis(1500),
        }
    }
}

impl ScrapeDelay {
    fn sample(&self) -> Duration {
        let floor = self.floor.min(self.ceiling);
        let ceiling = self.ceiling.max(self.floor);
        rand::thread_rng().gen_range(floor..=ceiling)
    }
}

/// Google Finance page-scrape provider.
pub struct GoogleFinanceProvider {
    client: Client,
    price_re: Regex,
    delay: ScrapeDelay,
}

impl GoogleFinanceProvider {
    /// Create a new Google Finance provider with the given request timeout
    /// and inter-request delay policy.
    pub fn new(timeout: Duration, delay: ScrapeDelay) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(timeout)
            .build()
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        let price_re = Regex::new(PRICE_PATTERN).map_err(|e| MarketDataError::ProviderError {
            provider: PROVIDER_ID.to_string(),
            message: format!("Invalid price pattern: {}", e),
        })?;
        Ok(Self {
            client,
            price_re,
            delay,
        })
    }

    /// Translate a canonical ticker into Google's `SYMBOL:EXCHANGE` format.
    ///
    /// The watchlist uses Yahoo-style exchange suffixes, so `TCS.NS`
    /// becomes `TCS:NSE` and `TCS.BO` becomes `TCS:BOM`. A ticker that
    /// already carries an exchange passes through; a bare US ticker is
    /// assumed NASDAQ.
    fn to_google_symbol(ticker: &str) -> String {
        if ticker.contains(':') {
            return ticker.to_string();
        }
        if let Some(base) = ticker.strip_suffix(".NS") {
            return format!("{}:NSE", base);
        }
        if let Some(base) = ticker.strip_suffix(".BO") {
            return format!("{}:BOM", base);
        }
        format!("{}:NASDAQ", ticker)
    }

    /// Pull the price out of a quote page body.
    ///
    /// The node content looks like `₹2,456.30` or `$189.95`; currency
    /// markers and thousands separators are stripped before parsing.
    fn parse_price(&self, body: &str) -> Option<Decimal> {
        let captures = self.price_re.captures(body)?;
        let raw = captures.get(1)?.as_str();
        let cleaned: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let price = Decimal::from_str(&cleaned).ok()?;
        if price.is_sign_negative() {
            return None;
        }
        Some(price)
    }

    /// Load one symbol's quote page and extract the price.
    async fn fetch_one(&self, ticker: &str) -> Result<Option<Decimal>, MarketDataError> {
        let symbol = Self::to_google_symbol(ticker);
        let url = format!("{}/{}", QUOTE_URL, symbol);
        debug!("Scraping Google Finance for {} ({})", ticker, symbol);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MarketDataError::from_request(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Page request for {} failed: HTTP {}", symbol, status),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::from_request(PROVIDER_ID, e))?;

        Ok(self.parse_price(&body))
    }
}

#[async_trait]
impl QuoteProvider for GoogleFinanceProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quotes(
        &self,
        tickers: &[String],
    ) -> Result<HashMap<String, SourceQuote>, MarketDataError> {
        let mut quotes = HashMap::new();
        let mut failed = 0usize;

        for (i, ticker) in tickers.iter().enumerate() {
            if i > 0 {
                tokio::time::sleep(self.delay.sample()).await;
            }

            match self.fetch_one(ticker).await {
                Ok(Some(price)) => {
                    quotes.insert(ticker.clone(), SourceQuote::price_only(ticker.clone(), price));
                }
                Ok(None) => {
                    debug!("No price node found for {} on Google Finance", ticker);
                }
                Err(e) => {
                    failed += 1;
                    warn!("Google Finance scrape failed for {}: {}", ticker, e);
                }
            }
        }

        Self::finalize(quotes, failed, tickers.len())
    }
}

impl GoogleFinanceProvider {
    /// Decide the call outcome once every symbol was attempted.
    ///
    /// A missing price node is a partial miss, but a majority of transport
    /// failures means the client is being blocked or throttled; that fails
    /// the whole call even when a few pages slipped through.
    fn finalize(
        quotes: HashMap<String, SourceQuote>,
        failed: usize,
        requested: usize,
    ) -> Result<HashMap<String, SourceQuote>, MarketDataError> {
        if requested > 0 && failed * 2 > requested {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("{} of {} page requests failed", failed, requested),
            });
        }
        if quotes.is_empty() {
            return Err(MarketDataError::EmptyResponse {
                provider: PROVIDER_ID.to_string(),
            });
        }
        Ok(quotes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn provider() -> GoogleFinanceProvider {
        GoogleFinanceProvider::new(Duration::from_secs(5), ScrapeDelay::default()).unwrap()
    }

    #[test]
    fn test_symbol_translation() {
        assert_eq!(
            GoogleFinanceProvider::to_google_symbol("TCS.NS"),
            "TCS:NSE"
        );
        assert_eq!(
            GoogleFinanceProvider::to_google_symbol("RELIANCE.BO"),
            "RELIANCE:BOM"
        );
        assert_eq!(
            GoogleFinanceProvider::to_google_symbol("AAPL"),
            "AAPL:NASDAQ"
        );
        assert_eq!(
            GoogleFinanceProvider::to_google_symbol("SHOP:TSE"),
            "SHOP:TSE"
        );
    }

    #[test]
    fn test_parse_price_with_rupee_marker() {
        let body = r#"<div class="YMlKec fxKbKc">₹2,456.30</div>"#;
        assert_eq!(provider().parse_price(body), Some(dec!(2456.30)));
    }

    #[test]
    fn test_parse_price_with_dollar_marker() {
        let body = r#"<main><div class="YMlKec fxKbKc">$189.95</div></main>"#;
        assert_eq!(provider().parse_price(body), Some(dec!(189.95)));
    }

    #[test]
    fn test_parse_price_missing_node() {
        let body = r#"<div class="something-else">189.95</div>"#;
        assert_eq!(provider().parse_price(body), None);
    }

    #[test]
    fn test_minority_of_transport_failures_keeps_partial_quotes() {
        let mut quotes = HashMap::new();
        quotes.insert(
            "TCS.NS".to_string(),
            SourceQuote::price_only("TCS.NS", dec!(3500)),
        );
        quotes.insert(
            "INFY.NS".to_string(),
            SourceQuote::price_only("INFY.NS", dec!(1380)),
        );

        let result = GoogleFinanceProvider::finalize(quotes, 1, 3).unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_majority_of_transport_failures_fails_the_provider() {
        // Two of three requests erroring looks like a blocked client, not
        // a markup change; the surviving quote is discarded.
        let mut quotes = HashMap::new();
        quotes.insert(
            "TCS.NS".to_string(),
            SourceQuote::price_only("TCS.NS", dec!(3500)),
        );

        let err = GoogleFinanceProvider::finalize(quotes, 2, 3).unwrap_err();
        assert!(matches!(err, MarketDataError::ProviderError { .. }));
    }

    #[test]
    fn test_no_prices_and_no_failures_is_empty_response() {
        let err = GoogleFinanceProvider::finalize(HashMap::new(), 0, 3).unwrap_err();
        assert!(matches!(err, MarketDataError::EmptyResponse { .. }));
    }

    #[test]
    fn test_delay_sample_within_bounds() {
        let delay = ScrapeDelay {
            floor: Duration::from_millis(500),
            ceiling: Duration::from_millis(1500),
        };
        for _ in 0..100 {
            let d = delay.sample();
            assert!(d >= delay.floor && d <= delay.ceiling);
        }
    }
}
