//! Static plan catalog
//!
//! One flat table keyed by (provider, plan name). Lookups are exact and
//! case-sensitive; there is no fallback rule.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::model::{PlanVariant, PricingRule, Provider};
use super::model::Provider::{Att, BoostMobile, MetroPcs, StraightTalk, TMobile, Verizon};
use crate::shared::errors::{DomainError, DomainResult};

/// A catalog row: the plan table id and its pricing rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub plan_id: i32,
    pub rule: PricingRule,
}

const fn minutes_free(
    plan_id: i32,
    provider: Provider,
    base_price: Decimal,
    tax: Decimal,
    data_limit: u32,
    price_per_gb: Decimal,
) -> CatalogEntry {
    CatalogEntry {
        plan_id,
        rule: PricingRule {
            provider,
            variant: PlanVariant::UnlimitedMinutesPayForData,
            base_price,
            tax,
            call_limit: None,
            data_limit: Some(data_limit),
            price_per_minute: None,
            price_per_gb: Some(price_per_gb),
        },
    }
}

const fn data_free(
    plan_id: i32,
    provider: Provider,
    base_price: Decimal,
    tax: Decimal,
    call_limit: u32,
    price_per_minute: Decimal,
) -> CatalogEntry {
    CatalogEntry {
        plan_id,
        rule: PricingRule {
            provider,
            variant: PlanVariant::UnlimitedDataPayForMinutes,
            base_price,
            tax,
            call_limit: Some(call_limit),
            data_limit: None,
            price_per_minute: Some(price_per_minute),
            price_per_gb: None,
        },
    }
}

#[allow(clippy::too_many_arguments)]
const fn pay_for_both(
    plan_id: i32,
    provider: Provider,
    base_price: Decimal,
    tax: Decimal,
    call_limit: u32,
    data_limit: u32,
    price_per_minute: Decimal,
    price_per_gb: Decimal,
) -> CatalogEntry {
    CatalogEntry {
        plan_id,
        rule: PricingRule {
            provider,
            variant: PlanVariant::PayForBoth,
            base_price,
            tax,
            call_limit: Some(call_limit),
            data_limit: Some(data_limit),
            price_per_minute: Some(price_per_minute),
            price_per_gb: Some(price_per_gb),
        },
    }
}

const fn unlimited(plan_id: i32, provider: Provider, base_price: Decimal, tax: Decimal) -> CatalogEntry {
    CatalogEntry {
        plan_id,
        rule: PricingRule {
            provider,
            variant: PlanVariant::Unlimited,
            base_price,
            tax,
            call_limit: None,
            data_limit: None,
            price_per_minute: None,
            price_per_gb: None,
        },
    }
}

static CATALOG: [CatalogEntry; 15] = [
    minutes_free(1, Att, dec!(39.00), dec!(3.22), 50, dec!(0.09)),
    data_free(4, Att, dec!(45.00), dec!(3.71), 450, dec!(0.06)),
    pay_for_both(7, Att, dec!(30.00), dec!(2.48), 450, 50, dec!(0.06), dec!(0.09)),
    unlimited(10, Att, dec!(60.00), dec!(4.95)),
    minutes_free(2, Verizon, dec!(24.00), dec!(1.98), 30, dec!(0.15)),
    data_free(5, Verizon, dec!(30.00), dec!(2.45), 300, dec!(0.10)),
    pay_for_both(8, Verizon, dec!(20.00), dec!(1.65), 300, 30, dec!(0.10), dec!(0.15)),
    unlimited(11, Verizon, dec!(40.00), dec!(3.30)),
    unlimited(12, TMobile, dec!(50.00), dec!(4.13)),
    minutes_free(3, BoostMobile, dec!(21.00), dec!(1.73), 35, dec!(0.19)),
    data_free(6, BoostMobile, dec!(26.25), dec!(2.17), 200, dec!(0.13)),
    pay_for_both(9, BoostMobile, dec!(17.50), dec!(1.44), 200, 35, dec!(0.13), dec!(0.19)),
    unlimited(13, BoostMobile, dec!(35.00), dec!(2.89)),
    unlimited(14, MetroPcs, dec!(55.00), dec!(4.54)),
    unlimited(15, StraightTalk, dec!(45.00), dec!(3.71)),
];

/// Plan name that is charged at its flat price without a usage query
pub const UNLIMITED_PLAN: &str = "Unlimited";

/// Whether a plan short-circuits to its flat price.
///
/// Callers check this before fetching usage so that Unlimited plans never
/// hit the usage store.
pub fn is_unlimited_plan(plan_name: &str) -> bool {
    plan_name == UNLIMITED_PLAN
}

/// All catalog rows
pub fn entries() -> &'static [CatalogEntry] {
    &CATALOG
}

/// Rules offered by one provider, in catalog order
pub fn plans_for(provider: Provider) -> impl Iterator<Item = &'static PricingRule> {
    CATALOG
        .iter()
        .filter(move |e| e.rule.provider == provider)
        .map(|e| &e.rule)
}

pub fn lookup(provider: Provider, plan_name: &str) -> Option<&'static PricingRule> {
    CATALOG
        .iter()
        .find(|e| e.rule.provider == provider && e.rule.plan_name() == plan_name)
        .map(|e| &e.rule)
}

/// Rule for a plan table id
pub fn lookup_by_plan_id(plan_id: i32) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.plan_id == plan_id)
}

/// Resolve a catalog row from raw provider and plan names.
///
/// Fails with `UnknownProvider` when the carrier is not resold, and with
/// `UnknownPlan` when the provider does not offer the named plan.
pub fn resolve_entry(provider_name: &str, plan_name: &str) -> DomainResult<&'static CatalogEntry> {
    let provider: Provider = provider_name.parse()?;
    CATALOG
        .iter()
        .find(|e| e.rule.provider == provider && e.rule.plan_name() == plan_name)
        .ok_or_else(|| DomainError::UnknownPlan {
            provider: provider_name.to_string(),
            plan: plan_name.to_string(),
        })
}

/// Resolve a pricing rule from raw provider and plan names
pub fn resolve_pricing_rule(provider_name: &str, plan_name: &str) -> DomainResult<&'static PricingRule> {
    resolve_entry(provider_name, plan_name).map(|e| &e.rule)
}
