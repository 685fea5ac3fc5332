//! Billing service for rating plans and building customer statements

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::domain::{
    flat_charge, is_unlimited_plan, rate_totals, rate_usage, resolve_pricing_rule,
    ChargeBreakdown, DomainResult, LineCharge, PhonePlan, PricingRule, RepositoryProvider,
    Statement, StatementLine, UsageTotals,
};

/// Service for billing operations
pub struct BillingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BillingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Build the statement for every transaction of a customer.
    ///
    /// Unlimited plans are priced flat without touching the usage store.
    /// Lines whose plan cannot be rated are kept with a reason instead of
    /// failing the statement. Usage is loaded at most once.
    pub async fn customer_statement(&self, customer_id: i32) -> DomainResult<Statement> {
        let transactions = self
            .repos
            .transactions()
            .find_for_customer(customer_id)
            .await?;

        let mut usage: Option<UsageTotals> = None;
        let mut lines = Vec::with_capacity(transactions.len());

        for transaction in transactions {
            let plan = self.repos.plans().find_by_id(transaction.plan_id).await?;

            let (rule, charge) = match &plan {
                Some(plan) => self.price_line(customer_id, plan, &mut usage).await?,
                None => {
                    warn!(
                        "Transaction {} references unknown plan {}",
                        transaction.transaction_id, transaction.plan_id
                    );
                    (
                        None,
                        LineCharge::NotRateable {
                            reason: format!("plan {} not found", transaction.plan_id),
                        },
                    )
                }
            };

            lines.push(StatementLine {
                transaction,
                plan,
                rule,
                charge,
            });
        }

        let statement = Statement::new(customer_id, lines);
        info!(
            "Statement for customer {}: {} line(s), {} not rateable, total {}",
            customer_id,
            statement.lines.len(),
            statement.not_rateable_count(),
            statement.format_grand_total()
        );
        let unlimited = statement.unlimited_total();
        if !unlimited.is_zero() {
            debug!(
                "Statement for customer {} leaves {} of Unlimited flat charges out of the total",
                customer_id, unlimited
            );
        }
        Ok(statement)
    }

    async fn price_line(
        &self,
        customer_id: i32,
        plan: &PhonePlan,
        usage: &mut Option<UsageTotals>,
    ) -> DomainResult<(Option<&'static PricingRule>, LineCharge)> {
        let rule = match resolve_pricing_rule(&plan.provider, &plan.plan_name) {
            Ok(rule) => rule,
            Err(e) if e.is_line_recoverable() => {
                warn!("Plan {} is not rateable: {}", plan.plan_id, e);
                return Ok((None, LineCharge::NotRateable { reason: e.to_string() }));
            }
            Err(e) => return Err(e),
        };

        if is_unlimited_plan(&plan.plan_name) {
            return Ok((Some(rule), LineCharge::Unlimited(flat_charge(rule))));
        }

        let totals = match *usage {
            Some(totals) => totals,
            None => {
                let records = self.repos.usage().find_for_customer(customer_id).await?;
                let totals = UsageTotals::from_records(&records);
                debug!(
                    "Customer {} usage: {} record(s), {} min, {} GB",
                    customer_id,
                    records.len(),
                    totals.total_minutes,
                    totals.total_data_usage
                );
                *usage = Some(totals);
                totals
            }
        };

        match rate_totals(rule, &totals) {
            Ok(breakdown) => Ok((
                Some(rule),
                LineCharge::Rated {
                    usage: totals,
                    breakdown,
                },
            )),
            Err(e) if e.is_line_recoverable() => {
                warn!("Plan {} usage could not be rated: {}", plan.plan_id, e);
                Ok((Some(rule), LineCharge::NotRateable { reason: e.to_string() }))
            }
            Err(e) => Err(e),
        }
    }

    /// Price a plan for the given usage without touching storage.
    ///
    /// Unlimited plans ignore the usage figures.
    pub fn preview(
        &self,
        provider: &str,
        plan_name: &str,
        total_minutes: Decimal,
        total_data_usage: Decimal,
    ) -> DomainResult<ChargeBreakdown> {
        let rule = resolve_pricing_rule(provider, plan_name)?;
        if is_unlimited_plan(plan_name) {
            return Ok(flat_charge(rule));
        }
        rate_usage(rule, total_minutes, total_data_usage)
    }
}
