//! Tickerdeck Core Crate
//!
//! Domain layer for the Tickerdeck dashboard backend: the static position
//! watchlist, the valuation arithmetic, and the snapshot pipeline that turns
//! positions plus (possibly degraded) market data into one batch of
//! valuation records per refresh window.
//!
//! The top-level entry point is [`snapshot::SnapshotService::current_valuations`],
//! which by design cannot fail: upstream outages degrade to simulated or
//! buy-price figures, never to an error.

pub mod errors;
pub mod positions;
pub mod snapshot;
pub mod valuation;

pub use errors::{Error, Result};
pub use positions::{load_watchlist, Position};
pub use snapshot::{Clock, ManualClock, SnapshotCache, SnapshotService, SystemClock};
pub use valuation::{apply_portfolio_share, valuation_record, ValuationRecord, SOURCE_BUY_PRICE};
