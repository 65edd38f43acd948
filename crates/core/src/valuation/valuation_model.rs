//! The valuation record served to the dashboard.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One fully valued position, as rendered by the dashboard.
///
/// The arithmetic invariants:
/// - `investment_value = buy_price × quantity`
/// - `current_value = current_price × quantity`
/// - `gain_loss = current_value − investment_value`
/// - `portfolio_share_percent = current_value / Σ current_value × 100`
///   (0 when the batch total is 0)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecord {
    pub id: String,
    pub name: String,
    pub ticker: String,
    pub sector: String,
    pub quantity: Decimal,
    pub buy_price: Decimal,

    /// Current market price. Never negative; falls back to `buy_price`
    /// when no source had data for this ticker.
    pub current_price: Decimal,
    /// Trailing P/E; 0 when the winning source carried none.
    pub pe_ratio: Decimal,
    pub investment_value: Decimal,
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    pub portfolio_share_percent: Decimal,

    /// Provenance of `current_price`: a provider id, `SIMULATED`, or
    /// `BUY_PRICE`. The dashboard renders degraded data the same way; this
    /// is purely informational.
    pub source: String,
}
