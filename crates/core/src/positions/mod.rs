pub mod position_model;
pub mod watchlist;

pub use position_model::Position;
pub use watchlist::load_watchlist;
