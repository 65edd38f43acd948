//! The static position model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// One position on the watchlist.
///
/// Supplied by external configuration and immutable for the process
/// lifetime; the pipeline only reads it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub name: String,
    /// Canonical ticker, Yahoo-style exchange suffixes (e.g. `TCS.NS`).
    pub ticker: String,
    pub sector: String,
    /// Number of units held. Positive.
    pub quantity: Decimal,
    /// Price paid per unit. Positive.
    pub buy_price: Decimal,
}

impl Position {
    /// Validate the figures a broken watchlist file could carry.
    pub fn validate(&self) -> Result<()> {
        if self.ticker.trim().is_empty() {
            return Err(Error::Validation(format!(
                "Position '{}' has an empty ticker",
                self.id
            )));
        }
        if self.quantity <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "Position '{}' has non-positive quantity {}",
                self.id, self.quantity
            )));
        }
        if self.buy_price <= Decimal::ZERO {
            return Err(Error::Validation(format!(
                "Position '{}' has non-positive buy price {}",
                self.id, self.buy_price
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn position() -> Position {
        Position {
            id: "p1".to_string(),
            name: "Tata Consultancy Services".to_string(),
            ticker: "TCS.NS".to_string(),
            sector: "Technology".to_string(),
            quantity: dec!(10),
            buy_price: dec!(3500),
        }
    }

    #[test]
    fn test_valid_position() {
        assert!(position().validate().is_ok());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut p = position();
        p.quantity = Decimal::ZERO;
        assert!(matches!(p.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_negative_buy_price_rejected() {
        let mut p = position();
        p.buy_price = dec!(-1);
        assert!(matches!(p.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn test_camel_case_wire_format() {
        let json = r#"{
            "id": "p1",
            "name": "Tata Consultancy Services",
            "ticker": "TCS.NS",
            "sector": "Technology",
            "quantity": 10,
            "buyPrice": 3500.50
        }"#;
        let p: Position = serde_json::from_str(json).unwrap();
        assert_eq!(p.buy_price, dec!(3500.50));
    }
}
