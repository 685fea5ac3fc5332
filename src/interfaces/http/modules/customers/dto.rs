//! Customer statement DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::CustomerUsage;
use crate::domain::{LineCharge, Statement, StatementLine, UsageRecord, UsageTotals};
use crate::interfaces::http::common::non_negative;
use crate::interfaces::http::modules::billing::ChargeBreakdownDto;
use crate::shared::money::round_currency;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsageDto {
    pub total_minutes: Decimal,
    pub total_data_usage: Decimal,
}

impl From<&UsageTotals> for UsageDto {
    fn from(usage: &UsageTotals) -> Self {
        Self {
            total_minutes: usage.total_minutes,
            total_data_usage: usage.total_data_usage,
        }
    }
}

/// One transaction on a customer statement
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatementLineDto {
    pub transaction_id: i32,
    pub transaction_time: DateTime<Utc>,
    pub payment_type: String,
    pub plan_id: i32,
    pub provider: Option<String>,
    pub plan: Option<String>,
    /// `rated`, `unlimited` or `not_rateable`
    pub kind: String,
    pub usage: Option<UsageDto>,
    pub charge: Option<ChargeBreakdownDto>,
    /// Amount stored with the transaction
    pub recorded_amount: Option<Decimal>,
    pub reason: Option<String>,
}

impl From<&StatementLine> for StatementLineDto {
    fn from(line: &StatementLine) -> Self {
        let reason = match &line.charge {
            LineCharge::NotRateable { reason } => Some(reason.clone()),
            _ => None,
        };

        Self {
            transaction_id: line.transaction.transaction_id,
            transaction_time: line.transaction.transaction_time,
            payment_type: line.transaction.payment_type.to_string(),
            plan_id: line.transaction.plan_id,
            provider: line.plan.as_ref().map(|p| p.provider.clone()),
            plan: line.plan.as_ref().map(|p| p.plan_name.clone()),
            kind: line.charge.kind().to_string(),
            usage: line.charge.usage().map(UsageDto::from),
            charge: line.charge.breakdown().map(ChargeBreakdownDto::from),
            recorded_amount: line.transaction.amount,
            reason,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatementResponse {
    pub customer_id: i32,
    pub lines: Vec<StatementLineDto>,
    /// Sum of the rated lines
    pub grand_total: Decimal,
    pub formatted_grand_total: String,
    /// Flat charges of Unlimited lines, not included in `grand_total`
    pub unlimited_total: Decimal,
    pub not_rateable: usize,
}

impl From<&Statement> for StatementResponse {
    fn from(statement: &Statement) -> Self {
        Self {
            customer_id: statement.customer_id,
            lines: statement.lines.iter().map(StatementLineDto::from).collect(),
            grand_total: statement.grand_total_rounded(),
            formatted_grand_total: statement.format_grand_total(),
            unlimited_total: round_currency(statement.unlimited_total()),
            not_rateable: statement.not_rateable_count(),
        }
    }
}

/// A call record to append to the customer's usage
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordUsageRequest {
    /// Minutes, fractional
    #[validate(custom(function = "non_negative"))]
    pub duration: Decimal,
    /// Gigabytes, fractional
    #[validate(custom(function = "non_negative"))]
    pub data_usage: Decimal,
    /// Defaults to the time the record is received
    pub recorded_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsageRecordDto {
    pub customer_id: i32,
    pub duration: Decimal,
    pub data_usage: Decimal,
    pub recorded_at: DateTime<Utc>,
}

impl From<&UsageRecord> for UsageRecordDto {
    fn from(record: &UsageRecord) -> Self {
        Self {
            customer_id: record.customer_id,
            duration: record.duration,
            data_usage: record.data_usage,
            recorded_at: record.recorded_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CustomerUsageResponse {
    pub customer_id: i32,
    pub records: Vec<UsageRecordDto>,
    pub totals: UsageDto,
}

impl From<&CustomerUsage> for CustomerUsageResponse {
    fn from(usage: &CustomerUsage) -> Self {
        Self {
            customer_id: usage.customer_id,
            records: usage.records.iter().map(UsageRecordDto::from).collect(),
            totals: UsageDto::from(&usage.totals),
        }
    }
}
