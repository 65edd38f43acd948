use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use tickerdeck_core::{load_watchlist, SnapshotCache, SnapshotService, SystemClock};
use tickerdeck_market_data::{
    GoogleFinanceProvider, ProviderChain, QuoteProvider, ScrapeDelay, SimulatedQuoteSource,
    YahooProvider,
};

use crate::config::Config;

pub struct AppState {
    pub snapshot_service: Arc<SnapshotService>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TD_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let positions = load_watchlist(&config.positions_file)?;
    tracing::info!(
        "Serving {} positions, refresh window {}s",
        positions.len(),
        config.refresh_secs
    );

    // Declaration order is fallback priority: Yahoo's bulk endpoint first,
    // the Google scrape as backup.
    let yahoo = Arc::new(YahooProvider::new(config.request_timeout)?);
    let google = Arc::new(GoogleFinanceProvider::new(
        config.request_timeout,
        ScrapeDelay {
            floor: config.scrape_delay_floor,
            ceiling: config.scrape_delay_ceiling,
        },
    )?);
    let chain = ProviderChain::new(vec![
        yahoo as Arc<dyn QuoteProvider>,
        google as Arc<dyn QuoteProvider>,
    ]);

    let cache = SnapshotCache::new(
        chrono::Duration::seconds(config.refresh_secs as i64),
        Arc::new(SystemClock),
    );

    let snapshot_service =
        SnapshotService::new(positions, chain, SimulatedQuoteSource::new(), cache);

    Ok(Arc::new(AppState { snapshot_service }))
}
