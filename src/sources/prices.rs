use std::path::Path;

use anyhow::{Context, Error, Result};
use chrono::NaiveDate;
use csv::Reader;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{PriceSample, PriceSeries, PriceSeriesStore};

/// Loads `SYMBOL.csv` from the directory for each requested symbol, keeping
/// the symbols' order. A missing file is warned about and skipped; the
/// remaining symbols still load.
pub fn load_price_store(dir: &Path, symbols: &[String]) -> Result<PriceSeriesStore> {
    let mut store = PriceSeriesStore::new();

    for symbol in symbols {
        let path = dir.join(format!("{symbol}.csv"));
        if !path.exists() {
            warn!(symbol = %symbol, path = %path.display(), "price file not found, skipping");
            continue;
        }
        let series = load_price_series(symbol, &path)
            .with_context(|| format!("Failed to load price series for {}", symbol))?;
        store.insert(series);
    }

    Ok(store)
}

/// Reads one price history CSV. Only the `Date` and `Close` header columns
/// are used; any others (Open, High, Volume, ...) are ignored.
pub fn load_price_series(symbol: &str, path: &Path) -> Result<PriceSeries> {
    let mut reader = Reader::from_path(path)
        .with_context(|| format!("Failed to open CSV file at path: {}", path.display()))?;

    let headers = reader.headers()?.clone();
    let date_idx = headers
        .iter()
        .position(|header| header == "Date")
        .ok_or_else(|| Error::msg(format!("Missing 'Date' column in {}", path.display())))?;
    let close_idx = headers
        .iter()
        .position(|header| header == "Close")
        .ok_or_else(|| Error::msg(format!("Missing 'Close' column in {}", path.display())))?;

    let mut samples = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let rec =
            record.with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;

        let date = NaiveDate::parse_from_str(&rec[date_idx], "%Y-%m-%d").with_context(|| {
            format!(
                "Failed to parse date '{}' at row {}",
                &rec[date_idx],
                row_idx + 1
            )
        })?;
        let close = rec[close_idx].parse::<Decimal>().with_context(|| {
            format!(
                "Failed to parse close '{}' at row {}",
                &rec[close_idx],
                row_idx + 1
            )
        })?;

        samples.push(PriceSample::new(date, close));
    }

    PriceSeries::new(symbol.to_string(), samples)
}

/// Symbols derived from the `*.csv` files in a directory, sorted by name.
pub fn discover_symbols(dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read price directory: {}", dir.display()))?;

    let mut symbols = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "csv")
            && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
        {
            symbols.push(stem.to_string());
        }
    }
    symbols.sort();

    Ok(symbols)
}
