use std::cmp::Ordering;

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::prelude::ToPrimitive;

use crate::{
    error::AnalyticsError,
    models::{PriceSeries, PriceSeriesStore},
};

/// Both the sample standard deviation and a correlation window need at
/// least two points.
const MIN_SAMPLES: usize = 2;
const VARIANCE_FLOOR: f64 = 1e-12;

/// Descriptive statistics of one symbol's close-price series. The
/// correlation is `None` for the benchmark symbol itself, and for symbols
/// whose correlation failed (those also appear in the failure list).
#[derive(Clone, Copy, Debug, Getters, PartialEq, new)]
pub struct SeriesStatistics {
    average_close: f64,
    std_dev_close: f64,
    correlation_to_benchmark: Option<f64>,
}

/// Per-symbol results in store order, plus per-symbol failures. A symbol
/// with too few samples for mean/deviation produces no result at all; a
/// symbol whose correlation fails still reports mean and deviation.
#[derive(Clone, Debug, Default, Getters)]
pub struct StatisticsOutcome {
    results: Vec<(String, SeriesStatistics)>,
    failures: Vec<(String, AnalyticsError)>,
}

/// Computes mean, sample (N−1) standard deviation and Pearson correlation
/// against the benchmark for every series in the store. Failures are scoped
/// per symbol and never abort the batch.
pub fn calculate_statistics(store: &PriceSeriesStore, benchmark: &str) -> StatisticsOutcome {
    let benchmark_series = store.get(benchmark);
    let mut outcome = StatisticsOutcome::default();

    for series in store.iter() {
        let symbol = series.symbol().clone();

        let closes = closes_f64(series);
        if closes.is_empty() {
            outcome.failures.push((symbol, AnalyticsError::EmptySeries));
            continue;
        }
        if closes.len() < MIN_SAMPLES {
            outcome.failures.push((
                symbol,
                AnalyticsError::InsufficientSamples {
                    count: closes.len(),
                    required: MIN_SAMPLES,
                },
            ));
            continue;
        }

        let average_close = mean(&closes);
        let std_dev_close = sample_std_dev(&closes);

        let correlation = if series.symbol() == benchmark {
            // 1.0 against itself carries no information; omitted by design.
            None
        } else {
            match correlate_with_benchmark(series, benchmark, benchmark_series) {
                Ok(correlation) => Some(correlation),
                Err(err) => {
                    outcome.failures.push((symbol.clone(), err));
                    None
                }
            }
        };

        outcome.results.push((
            symbol,
            SeriesStatistics::new(average_close, std_dev_close, correlation),
        ));
    }

    outcome
}

fn correlate_with_benchmark(
    series: &PriceSeries,
    benchmark: &str,
    benchmark_series: Option<&PriceSeries>,
) -> Result<f64, AnalyticsError> {
    let aligned = benchmark_series
        .map(|reference| aligned_closes(series, reference))
        .unwrap_or_default();

    if aligned.len() < MIN_SAMPLES {
        return Err(AnalyticsError::MisalignedSeries {
            benchmark: benchmark.to_string(),
        });
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = aligned.into_iter().unzip();
    pearson(&xs, &ys).ok_or(AnalyticsError::DegenerateSeries {
        benchmark: benchmark.to_string(),
    })
}

/// Pairs of closes observed on the same date in both series. Dates present
/// in only one series are excluded. Relies on both series being
/// date-ascending, which the `PriceSeries` constructor guarantees.
fn aligned_closes(series: &PriceSeries, reference: &PriceSeries) -> Vec<(f64, f64)> {
    let a = series.samples();
    let b = reference.samples();
    let mut aligned = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].date().cmp(b[j].date()) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                if let (Some(x), Some(y)) = (a[i].close().to_f64(), b[j].close().to_f64()) {
                    aligned.push((x, y));
                }
                i += 1;
                j += 1;
            }
        }
    }

    aligned
}

fn closes_f64(series: &PriceSeries) -> Vec<f64> {
    series
        .samples()
        .iter()
        .filter_map(|sample| sample.close().to_f64())
        .collect()
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (N−1) standard deviation. Callers check `len() >= 2`.
fn sample_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() as f64 - 1.0);
    variance.sqrt()
}

/// Pearson correlation coefficient; `None` when either side has zero
/// variance, where the coefficient is undefined.
fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len() as f64;
    let mean_x = mean(xs);
    let mean_y = mean(ys);

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        covariance += (x - mean_x) * (y - mean_y);
        variance_x += (x - mean_x).powi(2);
        variance_y += (y - mean_y).powi(2);
    }

    if variance_x / (n - 1.0) < VARIANCE_FLOOR || variance_y / (n - 1.0) < VARIANCE_FLOOR {
        return None;
    }

    Some(covariance / (variance_x.sqrt() * variance_y.sqrt()))
}
