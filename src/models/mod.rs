pub mod earnings;
pub mod holding;
pub mod investor;
pub mod price_series;
pub mod quote;

pub use earnings::EarningsSummary;
pub use holding::{BondTerms, Holding, HoldingClass, HoldingId};
pub use investor::Investor;
pub use price_series::{PriceSample, PriceSeries, PriceSeriesStore};
pub use quote::Quote;
