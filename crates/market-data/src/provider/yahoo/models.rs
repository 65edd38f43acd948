//! Response structures for the Yahoo Finance bulk quote endpoint.

use serde::Deserialize;

/// Top-level shape of `v7/finance/quote`.
#[derive(Debug, Deserialize)]
pub struct YahooQuoteResponse {
    #[serde(rename = "quoteResponse")]
    pub quote_response: YahooQuoteResult,
}

#[derive(Debug, Deserialize)]
pub struct YahooQuoteResult {
    #[serde(default)]
    pub result: Vec<YahooQuoteEntry>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// One entry of `quoteResponse.result`. Yahoo returns many more fields;
/// only the ones the pipeline consumes are modeled.
#[derive(Debug, Deserialize)]
pub struct YahooQuoteEntry {
    pub symbol: String,
    #[serde(rename = "regularMarketPrice")]
    pub regular_market_price: Option<f64>,
    #[serde(rename = "trailingPE")]
    pub trailing_pe: Option<f64>,
}
