use std::fmt;

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::EarningsSummary;

/// One purchased lot of a symbol. Stocks and bonds share this shape; a bond
/// is a holding that carries [`BondTerms`].
#[derive(Clone, Debug, Deserialize, Getters, Serialize, new)]
pub struct Holding {
    investor_id: i64,
    purchase_id: i64,
    symbol: String,
    shares: Decimal,
    purchase_price: Decimal,
    current_price: Decimal,
    purchase_date: NaiveDate,
    bond_terms: Option<BondTerms>,
    #[new(default)]
    earnings: Option<EarningsSummary>,
}

impl Holding {
    pub fn id(&self) -> HoldingId {
        HoldingId::new(self.investor_id, self.purchase_id)
    }

    pub fn class(&self) -> HoldingClass {
        if self.bond_terms.is_some() {
            HoldingClass::Bond
        } else {
            HoldingClass::Stock
        }
    }

    /// Written only by the earnings engine.
    pub fn set_earnings(&mut self, earnings: Option<EarningsSummary>) {
        self.earnings = earnings;
    }
}

/// Coupon and yield of a bond holding. Carried through for reporting; the
/// earnings formulas do not use them.
#[derive(Clone, Copy, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct BondTerms {
    coupon: Decimal,
    #[serde(rename = "yield")]
    yield_rate: Decimal,
}

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum HoldingClass {
    Stock,
    Bond,
}

/// Composite key of a holding, used to address per-holding failures.
#[derive(Clone, Copy, Debug, Eq, Getters, Hash, PartialEq, new)]
pub struct HoldingId {
    investor_id: i64,
    purchase_id: i64,
}

impl fmt::Display for HoldingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.investor_id, self.purchase_id)
    }
}
