use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};

use crate::models::Quote;

/// Loads a JSON object mapping ticker to either a numeric latest price or a
/// human-readable absence/error message. Both variants are valid payloads.
pub fn load_quotes(path: &Path) -> Result<Vec<(String, Quote)>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open quotes file at path: {}", path.display()))?;
    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse quotes JSON at {}", path.display()))?;

    let mut quotes = Vec::new();
    for (ticker, value) in map {
        let quote = serde_json::from_value::<Quote>(value)
            .with_context(|| format!("Invalid quote payload for {}", ticker))?;
        quotes.push((ticker, quote));
    }

    Ok(quotes)
}
