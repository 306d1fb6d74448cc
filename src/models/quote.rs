use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest quote payload for a ticker: either a price or a human-readable
/// absence/error message. The message variant is data, not a failure, and
/// reaches display unchanged.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quote {
    Price(Decimal),
    Unavailable(String),
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quote::Price(price) => write!(f, "{:.2}", price),
            Quote::Unavailable(message) => f.write_str(message),
        }
    }
}
