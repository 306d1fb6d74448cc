use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use super::assembler::EarningsRow;

/// Writes earnings rows to a CSV file, one row per holding, in table order.
pub fn write_earnings_csv(path: &Path, rows: &[EarningsRow]) -> Result<()> {
    let mut writer = Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file at path: {}", path.display()))?;

    writer.write_record(["Symbol", "Shares", "Earnings/Loss", "Yearly Earnings/Loss"])?;
    for row in rows {
        writer.write_record([
            row.symbol().clone(),
            row.shares().to_string(),
            format!("{:.2}", row.earnings_or_loss()),
            format!("{:.2}", row.yearly_earnings_rate()),
        ])?;
    }
    writer.flush()?;

    Ok(())
}
