//! Charge breakdown produced by rating a plan

use rust_decimal::Decimal;

use crate::shared::money::{format_currency, round_currency};

/// Itemised charge for one plan over one period.
///
/// Components are kept at full precision. Use [`ChargeBreakdown::rounded`]
/// only for display, never before summing several breakdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChargeBreakdown {
    pub minutes_price: Decimal,
    pub data_price: Decimal,
    pub plan_price: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl ChargeBreakdown {
    pub fn new(plan_price: Decimal, tax: Decimal, minutes_price: Decimal, data_price: Decimal) -> Self {
        Self {
            minutes_price,
            data_price,
            plan_price,
            tax,
            total: plan_price + tax + minutes_price + data_price,
        }
    }

    /// Charge with no metered component
    pub fn flat(plan_price: Decimal, tax: Decimal) -> Self {
        Self::new(plan_price, tax, Decimal::ZERO, Decimal::ZERO)
    }

    /// The non-metered portion that the transaction workflow persists
    pub fn recorded_amount(&self) -> Decimal {
        self.plan_price + self.tax
    }

    /// Overage shown on the statement but not persisted with the transaction
    pub fn metered_amount(&self) -> Decimal {
        self.minutes_price + self.data_price
    }

    /// Copy with every component rounded to cents
    pub fn rounded(&self) -> Self {
        Self {
            minutes_price: round_currency(self.minutes_price),
            data_price: round_currency(self.data_price),
            plan_price: round_currency(self.plan_price),
            tax: round_currency(self.tax),
            total: round_currency(self.total),
        }
    }

    pub fn format_total(&self) -> String {
        format_currency(self.total)
    }
}
