//! Billing DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::ChargeBreakdown;
use crate::interfaces::http::common::non_negative;

/// Rate hypothetical usage against a catalog plan
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PreviewRequest {
    #[validate(length(min = 1, message = "provider is required"))]
    pub provider: String,
    #[validate(length(min = 1, message = "plan is required"))]
    pub plan: String,
    /// Minutes, fractional
    #[validate(custom(function = "non_negative"))]
    pub total_minutes: Decimal,
    /// Gigabytes, fractional
    #[validate(custom(function = "non_negative"))]
    pub total_data_usage: Decimal,
}

/// Charge breakdown rounded to cents
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChargeBreakdownDto {
    pub plan_price: Decimal,
    pub tax: Decimal,
    pub minutes_price: Decimal,
    pub data_price: Decimal,
    pub total: Decimal,
    pub formatted_total: String,
}

impl From<&ChargeBreakdown> for ChargeBreakdownDto {
    fn from(breakdown: &ChargeBreakdown) -> Self {
        let rounded = breakdown.rounded();
        Self {
            plan_price: rounded.plan_price,
            tax: rounded.tax,
            minutes_price: rounded.minutes_price,
            data_price: rounded.data_price,
            total: rounded.total,
            formatted_total: breakdown.format_total(),
        }
    }
}
