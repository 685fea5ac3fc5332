//! Domain layer: plan catalog, usage rating and the billing aggregates

pub mod account;
pub mod billing;
pub mod plan;
pub mod repositories;
pub mod transaction;
pub mod usage;

pub use account::{AccountRepository, BankAccount};
pub use billing::{
    flat_charge, rate_totals, rate_usage, ChargeBreakdown, LineCharge, Statement, StatementLine,
};
pub use plan::{
    is_unlimited_plan, resolve_entry, resolve_pricing_rule, CatalogEntry, PhoneNumber, PhonePlan, PlanRepository,
    PlanVariant, PricingRule, Provider, UNLIMITED_PLAN,
};
pub use repositories::RepositoryProvider;
pub use transaction::{PaymentType, Transaction, TransactionRepository};
pub use usage::{UsageRecord, UsageRepository, UsageTotals};

pub use crate::shared::errors::{DomainError, DomainResult};
