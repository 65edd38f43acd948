//! Yahoo Finance quote provider.
//!
//! Uses the unofficial bulk quote endpoint
//! (`v7/finance/quote?symbols=A,B,C`): all requested tickers go out in a
//! single round trip. The endpoint is unofficial and may break if Yahoo
//! changes API signatures or starts blocking IPs; requests must carry a
//! browser User-Agent or Yahoo rejects them outright.

mod models;

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::headers::browser_headers;
use crate::models::SourceQuote;
use crate::provider::traits::QuoteProvider;

use models::YahooQuoteResponse;

const PROVIDER_ID: &str = "YAHOO";
const QUOTE_URL: &str = "https://query2.finance.yahoo.com/v7/finance/quote";

/// Yahoo Finance bulk quote provider.
///
/// Yahoo already speaks the canonical ticker format used in the watchlist
/// (exchange suffixes like `.NS`), so no symbol translation is needed here.
pub struct YahooProvider {
    client: Client,
}

impl YahooProvider {
    /// Create a new Yahoo provider with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, MarketDataError> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(timeout)
            .build()
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    /// Convert one upstream entry into a normalized quote, rounding to 2
    /// decimal places and dropping negative figures outright.
    ///
    /// Rounding happens here, not downstream: `from_f64_retain` keeps the
    /// binary-float representation error (189.95f64 retains as
    /// 189.94999...), and the valuation arithmetic never re-rounds prices.
    fn normalize(entry: &models::YahooQuoteEntry) -> SourceQuote {
        let price = entry
            .regular_market_price
            .and_then(Decimal::from_f64_retain)
            .map(|p| p.round_dp(2))
            .filter(|p| !p.is_sign_negative());
        let pe_ratio = entry
            .trailing_pe
            .and_then(Decimal::from_f64_retain)
            .map(|pe| pe.round_dp(2))
            .filter(|pe| !pe.is_sign_negative() && !pe.is_zero());

        SourceQuote {
            symbol: entry.symbol.clone(),
            price,
            pe_ratio,
        }
    }
}

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quotes(
        &self,
        tickers: &[String],
    ) -> Result<HashMap<String, SourceQuote>, MarketDataError> {
        let symbols = tickers.join(",");
        debug!("Fetching bulk quotes from Yahoo for [{}]", symbols);

        let response = self
            .client
            .get(QUOTE_URL)
            .query(&[("symbols", symbols.as_str())])
            .send()
            .await
            .map_err(|e| MarketDataError::from_request(PROVIDER_ID, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Quote request failed: HTTP {}", status),
            });
        }

        let data: YahooQuoteResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: format!("Failed to parse quote response: {}", e),
                })?;

        if let Some(err) = &data.quote_response.error {
            warn!("Yahoo quote response carried an error field: {}", err);
        }

        let quotes: HashMap<String, SourceQuote> = data
            .quote_response
            .result
            .iter()
            .map(|entry| (entry.symbol.clone(), Self::normalize(entry)))
            .collect();

        if !quotes.values().any(SourceQuote::is_usable) {
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

    #[test]
    fn test_normalize_keeps_both_figures() {
        let entry = models::YahooQuoteEntry {
            symbol: "AAPL".to_string(),
            regular_market_price: Some(189.95),
            trailing_pe: Some(29.5),
        };
        let quote = YahooProvider::normalize(&entry);
        assert_eq!(quote.price, Some(dec!(189.95)));
        assert_eq!(quote.pe_ratio, Some(dec!(29.5)));
    }

    #[test]
    fn test_normalize_rounds_away_float_representation_noise() {
        // 189.95 has no exact f64 representation; the retained Decimal is
        // 189.94999... and must not leak into the normalized quote.
        let entry = models::YahooQuoteEntry {
            symbol: "AAPL".to_string(),
            regular_market_price: Some(189.95),
            trailing_pe: Some(28.13),
        };
        let quote = YahooProvider::normalize(&entry);
        assert_eq!(quote.price.unwrap().to_string(), "189.95");
        assert_eq!(quote.pe_ratio.unwrap().to_string(), "28.13");
    }

    #[test]
    fn test_normalize_missing_price_is_not_usable() {
        let entry = models::YahooQuoteEntry {
            symbol: "TCS.NS".to_string(),
            regular_market_price: None,
            trailing_pe: Some(31.0),
        };
        let quote = YahooProvider::normalize(&entry);
        assert!(!quote.is_usable());
        assert_eq!(quote.pe_ratio, Some(dec!(31)));
    }

    #[test]
    fn test_normalize_drops_negative_price() {
        let entry = models::YahooQuoteEntry {
            symbol: "BAD".to_string(),
            regular_market_price: Some(-1.0),
            trailing_pe: Some(-4.2),
        };
        let quote = YahooProvider::normalize(&entry);
        assert_eq!(quote.price, None);
        assert_eq!(quote.pe_ratio, None);
    }
}
