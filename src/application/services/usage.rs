//! Usage service for recording and reading metered call records

use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::{DomainError, DomainResult, RepositoryProvider, UsageRecord, UsageTotals};

/// A customer's call records with their summed totals
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerUsage {
    pub customer_id: i32,
    pub records: Vec<UsageRecord>,
    pub totals: UsageTotals,
}

pub struct UsageService {
    repos: Arc<dyn RepositoryProvider>,
}

impl UsageService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Append one call record for a customer.
    ///
    /// Negative minutes or gigabytes are rejected before anything is stored.
    /// `recorded_at` defaults to now.
    pub async fn record_usage(
        &self,
        customer_id: i32,
        duration: Decimal,
        data_usage: Decimal,
        recorded_at: Option<DateTime<Utc>>,
    ) -> DomainResult<UsageRecord> {
        if duration < Decimal::ZERO {
            return Err(DomainError::InvalidUsageValue {
                field: "duration",
                value: duration,
            });
        }
        if data_usage < Decimal::ZERO {
            return Err(DomainError::InvalidUsageValue {
                field: "data_usage",
                value: data_usage,
            });
        }

        let record = UsageRecord {
            customer_id,
            duration,
            data_usage,
            recorded_at: recorded_at.unwrap_or_else(Utc::now),
        };
        self.repos.usage().record(record.clone()).await?;

        info!(
            "Recorded usage for customer {}: {} min, {} GB",
            customer_id, duration, data_usage
        );
        Ok(record)
    }

    pub async fn customer_usage(&self, customer_id: i32) -> DomainResult<CustomerUsage> {
        let records = self.repos.usage().find_for_customer(customer_id).await?;
        let totals = UsageTotals::from_records(&records);
        Ok(CustomerUsage {
            customer_id,
            records,
            totals,
        })
    }
}
