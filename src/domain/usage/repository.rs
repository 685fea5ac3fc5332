//! Usage store interface

use async_trait::async_trait;

use super::model::UsageRecord;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait UsageRepository: Send + Sync {
    /// All usage records for a customer, in insertion order
    async fn find_for_customer(&self, customer_id: i32) -> DomainResult<Vec<UsageRecord>>;
    async fn record(&self, record: UsageRecord) -> DomainResult<()>;
}
