use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::{
    error::AnalyticsError,
    models::{EarningsSummary, Holding, HoldingId},
};

const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Computes earnings, percentage return and annualized rate for every
/// holding, writing the summary into the holding. A holding that cannot be
/// computed is left untouched and reported in the returned failure list;
/// it never aborts the rest of the batch.
///
/// The same formulas apply to stocks and bonds, so one pass covers both.
pub fn calculate_earnings(
    holdings: &mut [Holding],
    evaluation_date: NaiveDate,
) -> Vec<(HoldingId, AnalyticsError)> {
    let mut failures = Vec::new();

    for holding in holdings.iter_mut() {
        match summarize(holding, evaluation_date) {
            Ok(summary) => holding.set_earnings(Some(summary)),
            Err(err) => failures.push((holding.id(), err)),
        }
    }

    failures
}

/// Derives the three return metrics of one holding against an evaluation
/// date. Annualization is the percentage return divided by years held, not
/// a compounded rate.
pub fn summarize(
    holding: &Holding,
    evaluation_date: NaiveDate,
) -> Result<EarningsSummary, AnalyticsError> {
    let purchase_date = *holding.purchase_date();
    let days_held = (evaluation_date - purchase_date).num_days();

    if days_held < 0 {
        return Err(AnalyticsError::InvalidDateRange {
            purchase: purchase_date,
            evaluation: evaluation_date,
        });
    }
    if holding.purchase_price().is_zero() {
        return Err(AnalyticsError::DivisionByZero("purchase price"));
    }

    let price_delta = holding.current_price() - holding.purchase_price();
    let earnings_or_loss = price_delta * holding.shares();
    let earnings_percent = price_delta / holding.purchase_price() * dec!(100);

    let years_held = Decimal::from(days_held) / DAYS_PER_YEAR;
    if years_held.is_zero() {
        return Err(AnalyticsError::DivisionByZero("years held"));
    }
    let yearly_earnings_rate = earnings_percent / years_held;

    Ok(EarningsSummary::new(
        earnings_or_loss,
        earnings_percent,
        yearly_earnings_rate,
    ))
}
