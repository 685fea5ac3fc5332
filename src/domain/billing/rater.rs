//! Usage rater
//!
//! One formula serves the three metered variants: a per-unit price the rule
//! does not carry multiplies by zero.

use rust_decimal::Decimal;

use super::model::ChargeBreakdown;
use crate::domain::plan::PricingRule;
use crate::domain::usage::UsageTotals;
use crate::shared::errors::{DomainError, DomainResult};

/// Rate aggregated usage against a pricing rule.
///
/// Negative usage fails with `InvalidUsageValue`. The result is not rounded.
pub fn rate_usage(
    rule: &PricingRule,
    total_minutes: Decimal,
    total_data_usage: Decimal,
) -> DomainResult<ChargeBreakdown> {
    if total_minutes < Decimal::ZERO {
        return Err(DomainError::InvalidUsageValue {
            field: "total_minutes",
            value: total_minutes,
        });
    }
    if total_data_usage < Decimal::ZERO {
        return Err(DomainError::InvalidUsageValue {
            field: "total_data_usage",
            value: total_data_usage,
        });
    }

    let minutes_price = total_minutes * rule.price_per_minute.unwrap_or(Decimal::ZERO);
    let data_price = total_data_usage * rule.price_per_gb.unwrap_or(Decimal::ZERO);

    Ok(ChargeBreakdown::new(
        rule.base_price,
        rule.tax,
        minutes_price,
        data_price,
    ))
}

/// Rate summed usage totals
pub fn rate_totals(rule: &PricingRule, usage: &UsageTotals) -> DomainResult<ChargeBreakdown> {
    rate_usage(rule, usage.total_minutes, usage.total_data_usage)
}

/// Flat charge for plans billed without a usage query
pub fn flat_charge(rule: &PricingRule) -> ChargeBreakdown {
    ChargeBreakdown::flat(rule.base_price, rule.tax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plan::{catalog, resolve_pricing_rule, PlanVariant, Provider};
    use rust_decimal_macros::dec;

    #[test]
    fn att_pay_for_both() {
        let rule = resolve_pricing_rule("AT&T", "Pay for both").unwrap();
        let b = rate_usage(rule, dec!(10), dec!(2)).unwrap();
        assert_eq!(b.minutes_price, dec!(0.60));
        assert_eq!(b.data_price, dec!(0.18));
        assert_eq!(b.plan_price, dec!(30.00));
        assert_eq!(b.tax, dec!(2.48));
        assert_eq!(b.total, dec!(33.26));
        assert_eq!(b.total - b.tax, dec!(30.78));
    }

    #[test]
    fn verizon_minutes_plan_without_usage() {
        let rule = resolve_pricing_rule("Verizon", "Unlimited Data PAY for Minutes").unwrap();
        let b = rate_usage(rule, dec!(0), dec!(0)).unwrap();
        assert_eq!(b.minutes_price, dec!(0.00));
        assert_eq!(b.total, dec!(30.00) + dec!(2.45));
    }

    #[test]
    fn negative_minutes_are_rejected() {
        let rule = resolve_pricing_rule("AT&T", "Pay for both").unwrap();
        assert_eq!(
            rate_usage(rule, dec!(-5), dec!(1)),
            Err(DomainError::InvalidUsageValue {
                field: "total_minutes",
                value: dec!(-5),
            })
        );
    }

    #[test]
    fn negative_data_is_rejected() {
        let rule = resolve_pricing_rule("Boost Mobile", "Unlimited Minutes PAY for Data").unwrap();
        let err = rate_usage(rule, dec!(1), dec!(-0.01)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidUsageValue {
                field: "total_data_usage",
                ..
            }
        ));
    }

    #[test]
    fn negative_zero_is_accepted() {
        let rule = resolve_pricing_rule("AT&T", "Pay for both").unwrap();
        let b = rate_usage(rule, -Decimal::ZERO, Decimal::ZERO).unwrap();
        assert_eq!(b.total, rule.flat_price());
    }

    #[test]
    fn unmetered_dimension_is_free() {
        let rule = resolve_pricing_rule("AT&T", "Unlimited Minutes PAY for Data").unwrap();
        let b = rate_usage(rule, dec!(5000), dec!(3)).unwrap();
        assert_eq!(b.minutes_price, Decimal::ZERO);
        assert_eq!(b.data_price, dec!(0.27));

        let rule = resolve_pricing_rule("Boost Mobile", "Unlimited Data PAY for Minutes").unwrap();
        let b = rate_usage(rule, dec!(100), dec!(999)).unwrap();
        assert_eq!(b.minutes_price, dec!(13.00));
        assert_eq!(b.data_price, Decimal::ZERO);
    }

    #[test]
    fn limits_are_not_enforced() {
        let rule = resolve_pricing_rule("Verizon", "Pay for both").unwrap();
        // call limit is 300, data limit 30
        let b = rate_usage(rule, dec!(1000), dec!(100)).unwrap();
        assert_eq!(b.minutes_price, dec!(100.00));
        assert_eq!(b.data_price, dec!(15.00));
    }

    #[test]
    fn zero_usage_is_flat_for_every_rule() {
        for entry in catalog::entries() {
            let b = rate_usage(&entry.rule, Decimal::ZERO, Decimal::ZERO).unwrap();
            assert!(b.minutes_price.is_zero());
            assert!(b.data_price.is_zero());
            assert_eq!(b.total, entry.rule.flat_price());
        }
    }

    #[test]
    fn total_identity_holds_for_every_rule() {
        let samples = [
            (dec!(0), dec!(0)),
            (dec!(1), dec!(0.5)),
            (dec!(123.456), dec!(7.891)),
            (dec!(450), dec!(50)),
        ];
        for entry in catalog::entries() {
            for (minutes, data) in samples {
                let b = rate_usage(&entry.rule, minutes, data).unwrap();
                assert_eq!(b.total, b.plan_price + b.tax + b.minutes_price + b.data_price);
            }
        }
    }

    #[test]
    fn unlimited_rule_degenerates_to_flat_price() {
        let rule = resolve_pricing_rule("T-Mobile", "Unlimited").unwrap();
        let b = rate_usage(rule, dec!(800), dec!(40)).unwrap();
        assert_eq!(b, flat_charge(rule));
        assert_eq!(b.total, dec!(54.13));
    }

    #[test]
    fn missing_per_unit_price_contributes_zero() {
        let rule = PricingRule {
            provider: Provider::Att,
            variant: PlanVariant::PayForBoth,
            base_price: dec!(10),
            tax: dec!(1),
            call_limit: None,
            data_limit: None,
            price_per_minute: None,
            price_per_gb: Some(dec!(0.5)),
        };
        let b = rate_usage(&rule, dec!(100), dec!(4)).unwrap();
        assert_eq!(b.minutes_price, Decimal::ZERO);
        assert_eq!(b.total, dec!(13));
    }

    #[test]
    fn rate_totals_matches_rate_usage() {
        let rule = resolve_pricing_rule("Verizon", "Pay for both").unwrap();
        let usage = UsageTotals::new(dec!(12.5), dec!(1.25));
        assert_eq!(
            rate_totals(rule, &usage).unwrap(),
            rate_usage(rule, dec!(12.5), dec!(1.25)).unwrap()
        );
    }
}
