pub mod earnings;
pub mod statistics;

pub use earnings::calculate_earnings;
pub use statistics::{SeriesStatistics, StatisticsOutcome, calculate_statistics};
