//! Pure valuation arithmetic.
//!
//! Two passes: [`valuation_record`] turns one (position, price, P/E) triple
//! into a record, and [`apply_portfolio_share`] distributes the portfolio
//! share over the finished batch. Both are total functions with no failure
//! modes.

use rust_decimal::Decimal;

use crate::positions::Position;
use crate::valuation::ValuationRecord;

/// Provenance marker for records whose price defaulted to the buy price.
pub const SOURCE_BUY_PRICE: &str = "BUY_PRICE";

/// Compute one position's valuation figures.
///
/// `portfolio_share_percent` is left at zero; it is only meaningful over a
/// full batch and is filled in by [`apply_portfolio_share`].
pub fn valuation_record(
    position: &Position,
    current_price: Decimal,
    pe_ratio: Decimal,
    source: &str,
) -> ValuationRecord {
    let investment_value = position.buy_price * position.quantity;
    let current_value = current_price * position.quantity;
    let gain_loss = current_value - investment_value;

    ValuationRecord {
        id: position.id.clone(),
        name: position.name.clone(),
        ticker: position.ticker.clone(),
        sector: position.sector.clone(),
        quantity: position.quantity,
        buy_price: position.buy_price,
        current_price,
        pe_ratio,
        investment_value,
        current_value,
        gain_loss,
        portfolio_share_percent: Decimal::ZERO,
        source: source.to_string(),
    }
}

/// Second pass over a finished batch: each record's share of the total
/// current value, in percent rounded to 2 decimal places. All shares are
/// zero when the total is zero.
pub fn apply_portfolio_share(records: &mut [ValuationRecord]) {
    let total: Decimal = records.iter().map(|r| r.current_value).sum();
    if total.is_zero() {
        for record in records.iter_mut() {
            record.portfolio_share_percent = Decimal::ZERO;
        }
        return;
    }
    for record in records.iter_mut() {
        record.portfolio_share_percent =
            (record.current_value / total * Decimal::ONE_HUNDRED).round_dp(2);
    }
}
