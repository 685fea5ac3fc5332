//! Usage records and their per-customer totals

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

/// One metered call record
#[derive(Debug, Clone, PartialEq)]
pub struct UsageRecord {
    pub customer_id: i32,
    /// Minutes, fractional
    pub duration: Decimal,
    /// Gigabytes, fractional
    pub data_usage: Decimal,
    pub recorded_at: DateTime<Utc>,
}

/// Summed usage for one customer
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct UsageTotals {
    pub total_minutes: Decimal,
    pub total_data_usage: Decimal,
}

impl UsageTotals {
    pub fn new(total_minutes: Decimal, total_data_usage: Decimal) -> Self {
        Self {
            total_minutes,
            total_data_usage,
        }
    }

    /// Additive fold over the records; no records means zero usage.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a UsageRecord>,
    {
        records.into_iter().fold(Self::default(), |acc, r| Self {
            total_minutes: acc.total_minutes + r.duration,
            total_data_usage: acc.total_data_usage + r.data_usage,
        })
    }

    pub fn is_zero(&self) -> bool {
        self.total_minutes.is_zero() && self.total_data_usage.is_zero()
    }
}
