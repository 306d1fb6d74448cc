use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::{BondTerms, Holding, HoldingClass};

/// An investor and the holdings they own.
#[derive(Clone, Debug, Getters, new)]
pub struct Investor {
    investor_id: i64,
    name: String,
    address: String,
    phone: String,
    #[new(default)]
    holdings: Vec<Holding>,
}

impl Investor {
    pub fn add_stock(
        &mut self,
        purchase_id: i64,
        symbol: String,
        shares: Decimal,
        purchase_price: Decimal,
        current_price: Decimal,
        purchase_date: NaiveDate,
    ) {
        self.holdings.push(Holding::new(
            self.investor_id,
            purchase_id,
            symbol,
            shares,
            purchase_price,
            current_price,
            purchase_date,
            None,
        ));
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_bond(
        &mut self,
        purchase_id: i64,
        symbol: String,
        shares: Decimal,
        purchase_price: Decimal,
        current_price: Decimal,
        purchase_date: NaiveDate,
        coupon: Decimal,
        yield_rate: Decimal,
    ) {
        self.holdings.push(Holding::new(
            self.investor_id,
            purchase_id,
            symbol,
            shares,
            purchase_price,
            current_price,
            purchase_date,
            Some(BondTerms::new(coupon, yield_rate)),
        ));
    }

    pub fn add_holding(&mut self, holding: Holding) {
        self.holdings.push(holding);
    }

    pub fn holdings_mut(&mut self) -> &mut [Holding] {
        &mut self.holdings
    }

    pub fn holdings_of(&self, class: HoldingClass) -> impl Iterator<Item = &Holding> {
        self.holdings.iter().filter(move |h| h.class() == class)
    }
}
