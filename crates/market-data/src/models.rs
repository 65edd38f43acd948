//! Data models shared by the quote providers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single quote as normalized from an upstream source.
///
/// `price` and `pe_ratio` are independently optional: a ticker can appear in
/// a provider response without one or both figures. A missing price is a
/// per-ticker miss, handled downstream by falling back to the position's buy
/// price; it is never an error at the provider level.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceQuote {
    /// Canonical ticker, as requested by the caller (providers reverse any
    /// source-specific symbol translation before returning).
    pub symbol: String,

    /// Last traded price. Never negative when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    /// Trailing price-to-earnings ratio. Never negative when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pe_ratio: Option<Decimal>,
}

impl SourceQuote {
    /// Create a quote with both figures present.
    pub fn new(symbol: impl Into<String>, price: Decimal, pe_ratio: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price: Some(price),
            pe_ratio: Some(pe_ratio),
        }
    }

    /// Create a quote carrying only a price.
    pub fn price_only(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price: Some(price),
            pe_ratio: None,
        }
    }

    /// Whether this quote carries a usable price.
    pub fn is_usable(&self) -> bool {
        self.price.is_some()
    }
}
