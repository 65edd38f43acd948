pub mod valuation_calculator;
pub mod valuation_model;

pub use valuation_calculator::{apply_portfolio_share, valuation_record, SOURCE_BUY_PRICE};
pub use valuation_model::ValuationRecord;
