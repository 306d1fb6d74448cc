pub mod holdings;
pub mod prices;
pub mod quotes;
