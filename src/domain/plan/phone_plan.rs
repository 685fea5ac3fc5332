//! Plan table rows and the phone numbers assigned to them

use rust_decimal::Decimal;

use super::catalog::CatalogEntry;

/// A row of the plan table.
///
/// Provider and plan names are kept raw; they are resolved against the
/// catalog only when a line is rated.
#[derive(Debug, Clone, PartialEq)]
pub struct PhonePlan {
    pub plan_id: i32,
    pub provider: String,
    pub plan_name: String,
    pub call_limit: u32,
    pub data_limit: u32,
    pub price: Decimal,
    pub tax: Decimal,
}

impl PhonePlan {
    /// Amount recorded when a transaction is made for this plan
    pub fn flat_amount(&self) -> Decimal {
        self.price + self.tax
    }
}

impl From<&CatalogEntry> for PhonePlan {
    fn from(entry: &CatalogEntry) -> Self {
        let rule = &entry.rule;
        Self {
            plan_id: entry.plan_id,
            provider: rule.provider.as_str().to_string(),
            plan_name: rule.plan_name().to_string(),
            call_limit: rule.call_limit.unwrap_or(0),
            data_limit: rule.data_limit.unwrap_or(0),
            price: rule.base_price,
            tax: rule.tax,
        }
    }
}

/// A customer's phone number and the plan it is billed under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    pub phone_number_id: i32,
    pub plan_id: i32,
    pub customer_id: i32,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::catalog;
    use rust_decimal_macros::dec;

    #[test]
    fn mirrors_catalog_entry() {
        let entry = catalog::lookup_by_plan_id(4).unwrap();
        let plan = PhonePlan::from(entry);
        assert_eq!(plan.provider, "AT&T");
        assert_eq!(plan.plan_name, "Unlimited Data PAY for Minutes");
        assert_eq!(plan.call_limit, 450);
        assert_eq!(plan.data_limit, 0);
        assert_eq!(plan.flat_amount(), dec!(48.71));
    }
}
