use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use crate::{analytics::SeriesStatistics, models::Holding};

/// One presentation-ready earnings row. Rows keep the order their holdings
/// were supplied in.
#[derive(Clone, Debug, Getters, PartialEq, new)]
pub struct EarningsRow {
    symbol: String,
    shares: Decimal,
    earnings_or_loss: Decimal,
    yearly_earnings_rate: Decimal,
}

/// Flattens holdings with computed earnings into rows, preserving input
/// order. Holdings whose earnings were never computed are skipped without
/// reordering the rest.
pub fn earnings_rows<'a, I>(holdings: I) -> Vec<EarningsRow>
where
    I: IntoIterator<Item = &'a Holding>,
{
    holdings
        .into_iter()
        .filter_map(|holding| {
            holding.earnings().as_ref().map(|summary| {
                EarningsRow::new(
                    holding.symbol().clone(),
                    *holding.shares(),
                    *summary.earnings_or_loss(),
                    *summary.yearly_earnings_rate(),
                )
            })
        })
        .collect()
}

/// Statistics rendered as three parallel symbol→value mappings, in the
/// order the results were supplied. Symbols without a correlation (the
/// benchmark, or a failed correlation) have no entry in the third mapping.
#[derive(Clone, Debug, Default, Getters, PartialEq)]
pub struct StatisticsReport {
    averages: Vec<(String, f64)>,
    std_devs: Vec<(String, f64)>,
    correlations: Vec<(String, f64)>,
}

pub fn statistics_report(results: &[(String, SeriesStatistics)]) -> StatisticsReport {
    let mut report = StatisticsReport::default();

    for (symbol, stats) in results {
        report.averages.push((symbol.clone(), *stats.average_close()));
        report.std_devs.push((symbol.clone(), *stats.std_dev_close()));
        if let Some(correlation) = stats.correlation_to_benchmark() {
            report.correlations.push((symbol.clone(), *correlation));
        }
    }

    report
}
