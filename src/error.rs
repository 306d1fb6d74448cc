use chrono::NaiveDate;
use thiserror::Error;

/// Failure kinds of the earnings and statistics engines. Each failure is
/// scoped to one holding or symbol; the offending identifier travels next to
/// the error, not inside it.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalyticsError {
    #[error("division by zero: {0} is zero")]
    DivisionByZero(&'static str),

    #[error("purchase date {purchase} is after evaluation date {evaluation}")]
    InvalidDateRange {
        purchase: NaiveDate,
        evaluation: NaiveDate,
    },

    #[error("series has no samples")]
    EmptySeries,

    #[error("{count} samples where at least {required} are required")]
    InsufficientSamples { count: usize, required: usize },

    #[error("fewer than 2 dates shared with benchmark {benchmark}")]
    MisalignedSeries { benchmark: String },

    #[error("zero variance over the window aligned with benchmark {benchmark}")]
    DegenerateSeries { benchmark: String },
}
