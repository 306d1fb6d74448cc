pub mod assembler;
pub mod display;
pub mod export;

pub use assembler::{EarningsRow, StatisticsReport, earnings_rows, statistics_report};
