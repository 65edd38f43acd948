//! The top-level resolution pipeline.
//!
//! `resolve` carries the guarantee the dashboard depends on: it always
//! returns exactly one valuation record per watchlist position, in watchlist
//! order, no matter what the upstream sources do. Failures only ever narrow
//! in scope — a failed source advances the chain, an exhausted chain turns
//! on the simulator, a single missing ticker defaults to its buy price. A
//! stale or simulated number is preferred over a visible outage.

use std::collections::HashMap;
use std::sync::Arc;

use log::{info, warn};
use rust_decimal::Decimal;

use tickerdeck_market_data::simulated::{self, SimulatedQuoteSource};
use tickerdeck_market_data::{ProviderChain, SourceQuote};

use crate::positions::Position;
use crate::snapshot::SnapshotCache;
use crate::valuation::{apply_portfolio_share, valuation_record, ValuationRecord, SOURCE_BUY_PRICE};

/// The single cache key: the watchlist is static, so one batch exists.
const SNAPSHOT_KEY: &str = "watchlist";

/// Ties the watchlist, the provider chain, the simulator, and the snapshot
/// cache together into the one inbound operation.
pub struct SnapshotService {
    positions: Vec<Position>,
    chain: ProviderChain,
    simulator: SimulatedQuoteSource,
    cache: SnapshotCache,
}

impl SnapshotService {
    pub fn new(
        positions: Vec<Position>,
        chain: ProviderChain,
        simulator: SimulatedQuoteSource,
        cache: SnapshotCache,
    ) -> Arc<Self> {
        Arc::new(Self {
            positions,
            chain,
            simulator,
            cache,
        })
    }

    /// Current valuations, served from cache when fresh.
    pub async fn current_valuations(&self) -> Vec<ValuationRecord> {
        self.cache
            .get_or_compute(SNAPSHOT_KEY, || self.resolve())
            .await
    }

    /// Resolve quotes and value the whole batch. Infallible by design.
    pub async fn resolve(&self) -> Vec<ValuationRecord> {
        let tickers: Vec<String> = self.positions.iter().map(|p| p.ticker.clone()).collect();

        let (source, quotes) = match self.chain.fetch_first_available(&tickers).await {
            Ok((provider, quotes)) => {
                info!("Quotes resolved via provider '{}'", provider);
                (provider, quotes)
            }
            Err(e) => {
                warn!("All quote sources failed ({}). Serving simulated prices.", e);
                (simulated::PROVIDER_ID, self.simulate_all())
            }
        };

        let mut records: Vec<ValuationRecord> = self
            .positions
            .iter()
            .map(|position| self.value_position(position, &quotes, source))
            .collect();

        apply_portfolio_share(&mut records);
        records
    }

    /// Value one position against the winning quote map, substituting the
    /// buy price when the map has no usable quote for its ticker.
    fn value_position(
        &self,
        position: &Position,
        quotes: &HashMap<String, SourceQuote>,
        source: &str,
    ) -> ValuationRecord {
        match quotes.get(&position.ticker).and_then(|q| q.price) {
            Some(price) => {
                let pe_ratio = quotes
                    .get(&position.ticker)
                    .and_then(|q| q.pe_ratio)
                    .unwrap_or(Decimal::ZERO);
                valuation_record(position, price, pe_ratio, source)
            }
            None => valuation_record(
                position,
                position.buy_price,
                Decimal::ZERO,
                SOURCE_BUY_PRICE,
            ),
        }
    }

    /// Fabricate a quote per position, anchored to each buy price.
    fn simulate_all(&self) -> HashMap<String, SourceQuote> {
        self.positions
            .iter()
            .map(|p| {
                (
                    p.ticker.clone(),
                    self.simulator.simulate(&p.ticker, p.buy_price),
                )
            })
            .collect()
    }
}
