use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived return metrics of a holding, computed by the earnings engine.
#[derive(Clone, Copy, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct EarningsSummary {
    earnings_or_loss: Decimal,
    earnings_percent: Decimal,
    yearly_earnings_rate: Decimal,
}
