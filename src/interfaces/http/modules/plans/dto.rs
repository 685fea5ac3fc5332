//! Plan catalog DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::CatalogEntry;

/// A catalog plan and its pricing rule
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlanDto {
    pub plan_id: i32,
    pub provider: String,
    pub plan: String,
    pub base_price: Decimal,
    pub tax: Decimal,
    /// `base_price + tax`
    pub flat_price: Decimal,
    pub call_limit: Option<u32>,
    pub data_limit: Option<u32>,
    pub price_per_minute: Option<Decimal>,
    pub price_per_gb: Option<Decimal>,
}

impl From<&CatalogEntry> for PlanDto {
    fn from(entry: &CatalogEntry) -> Self {
        let rule = &entry.rule;
        Self {
            plan_id: entry.plan_id,
            provider: rule.provider.to_string(),
            plan: rule.plan_name().to_string(),
            base_price: rule.base_price,
            tax: rule.tax,
            flat_price: rule.flat_price(),
            call_limit: rule.call_limit,
            data_limit: rule.data_limit,
            price_per_minute: rule.price_per_minute,
            price_per_gb: rule.price_per_gb,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlanListQuery {
    /// Exact provider name, e.g. `AT&T`
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PlanLookupQuery {
    pub provider: String,
    pub plan: String,
}
