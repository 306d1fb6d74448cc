use std::path::Path;

use anyhow::{Context, Error, Result};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use rust_decimal::Decimal;

use crate::models::{BondTerms, Holding};

/// Loads holdings from a CSV file with a header row and columns
/// `investor_id,purchase_id,symbol,shares,purchase_price,current_price,purchase_date`
/// plus optional trailing `coupon,yield` columns that make the row a bond.
pub fn load_holdings(path: &Path) -> Result<Vec<Holding>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV file at path: {}", path.display()))?;

    let mut holdings = Vec::new();
    for (row_idx, record) in reader.records().enumerate() {
        let rec =
            record.with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;

        if rec.len() != 7 && rec.len() != 9 {
            return Err(Error::msg(format!(
                "Invalid CSV format at row {}: expected 7 or 9 columns, found {}",
                row_idx + 1,
                rec.len()
            )));
        }

        let investor_id = parse_id(&rec[0], "investor id", row_idx)?;
        let purchase_id = parse_id(&rec[1], "purchase id", row_idx)?;
        let symbol = rec[2].to_string();
        let shares = parse_decimal(&rec[3], "shares", row_idx)?;
        let purchase_price = parse_decimal(&rec[4], "purchase price", row_idx)?;
        let current_price = parse_decimal(&rec[5], "current price", row_idx)?;
        let purchase_date = parse_date(&rec[6], row_idx)?;

        let bond_terms = if rec.len() == 9 {
            Some(BondTerms::new(
                parse_decimal(&rec[7], "coupon", row_idx)?,
                parse_decimal(&rec[8], "yield", row_idx)?,
            ))
        } else {
            None
        };

        holdings.push(Holding::new(
            investor_id,
            purchase_id,
            symbol,
            shares,
            purchase_price,
            current_price,
            purchase_date,
            bond_terms,
        ));
    }

    Ok(holdings)
}

fn parse_id(field: &str, field_name: &str, row_idx: usize) -> Result<i64> {
    field.parse::<i64>().with_context(|| {
        format!(
            "Failed to parse {} '{}' at row {}",
            field_name,
            field,
            row_idx + 1
        )
    })
}

fn parse_decimal(field: &str, field_name: &str, row_idx: usize) -> Result<Decimal> {
    field.parse::<Decimal>().with_context(|| {
        format!(
            "Failed to parse {} '{}' at row {}",
            field_name,
            field,
            row_idx + 1
        )
    })
}

fn parse_date(field: &str, row_idx: usize) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(field, "%Y-%m-%d")
        .with_context(|| format!("Failed to parse date '{}' at row {}", field, row_idx + 1))
}
