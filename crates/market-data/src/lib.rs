//! Tickerdeck Market Data Crate
//!
//! This crate provides the quote acquisition layer for the Tickerdeck
//! dashboard backend.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Multiple quote providers: Yahoo Finance (bulk), Google Finance (scrape)
//! - Strictly ordered fallback between providers via [`ProviderChain`]
//! - A seedable simulated quote source for when every provider is down
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |  ProviderChain   |  (ordered, short-circuiting fallback)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |  YahooProvider   | --> | GoogleFinance    |  (tried in declaration order)
//! |  (bulk endpoint) |     | Provider (scrape)|
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |   SourceQuote    |  (price + P/E, keyed by canonical ticker)
//! +------------------+
//! ```
//!
//! The simulated source ([`SimulatedQuoteSource`]) is deliberately not a
//! [`QuoteProvider`]: it needs a position's buy price as an anchor, so the
//! caller invokes it explicitly once the chain reports
//! [`MarketDataError::AllProvidersFailed`].

pub mod chain;
pub mod errors;
pub mod headers;
pub mod models;
pub mod provider;
pub mod simulated;

pub use chain::ProviderChain;
pub use errors::MarketDataError;
pub use models::SourceQuote;
pub use provider::{GoogleFinanceProvider, QuoteProvider, ScrapeDelay, YahooProvider};
pub use simulated::SimulatedQuoteSource;
