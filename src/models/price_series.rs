use anyhow::{Error, Result};
use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One daily observation of a symbol's closing price.
#[derive(Clone, Copy, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct PriceSample {
    date: NaiveDate,
    close: Decimal,
}

/// Date-ascending close-price history of one symbol. The constructor sorts
/// and rejects duplicate dates, so downstream code can rely on the ordering.
#[derive(Clone, Debug, Getters)]
pub struct PriceSeries {
    symbol: String,
    samples: Vec<PriceSample>,
}

impl PriceSeries {
    pub fn new(symbol: String, mut samples: Vec<PriceSample>) -> Result<Self> {
        samples.sort_by_key(|sample| *sample.date());
        if let Some(pair) = samples.windows(2).find(|pair| pair[0].date() == pair[1].date()) {
            return Err(Error::msg(format!(
                "Duplicate date {} in price series for {}",
                pair[0].date(),
                symbol
            )));
        }
        Ok(Self { symbol, samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Per-symbol price histories, preserving the order symbols were supplied in.
#[derive(Clone, Debug, Default)]
pub struct PriceSeriesStore {
    series: Vec<PriceSeries>,
}

impl PriceSeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a series, replacing any existing series for the same symbol
    /// without disturbing its position.
    pub fn insert(&mut self, series: PriceSeries) {
        match self.series.iter_mut().find(|s| s.symbol() == series.symbol()) {
            Some(slot) => *slot = series,
            None => self.series.push(series),
        }
    }

    pub fn get(&self, symbol: &str) -> Option<&PriceSeries> {
        self.series.iter().find(|s| s.symbol() == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceSeries> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
