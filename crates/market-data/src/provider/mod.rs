//! Quote provider implementations.
//!
//! Each submodule integrates one upstream source and normalizes its response
//! shape into [`SourceQuote`](crate::models::SourceQuote) mappings.

pub mod google;
pub mod traits;
pub mod yahoo;

pub use google::{GoogleFinanceProvider, ScrapeDelay};
pub use traits::QuoteProvider;
pub use yahoo::YahooProvider;
