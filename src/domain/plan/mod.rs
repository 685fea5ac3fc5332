//! Plan aggregate
//!
//! Providers, plan variants, the static pricing catalog and plan table rows.

pub mod catalog;
pub mod model;
pub mod phone_plan;
pub mod repository;

pub use catalog::{is_unlimited_plan, resolve_entry, resolve_pricing_rule, CatalogEntry, UNLIMITED_PLAN};
pub use model::{PlanVariant, PricingRule, Provider};
pub use phone_plan::{PhoneNumber, PhonePlan};
pub use repository::PlanRepository;
