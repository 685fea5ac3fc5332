//! Transaction repository interface

use async_trait::async_trait;

use super::model::Transaction;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// Customer's transactions ordered by transaction time, oldest first
    async fn find_for_customer(&self, customer_id: i32) -> DomainResult<Vec<Transaction>>;
    async fn find_by_id(&self, transaction_id: i32) -> DomainResult<Option<Transaction>>;
    /// Highest transaction id in use, `None` when the table is empty
    async fn max_id(&self) -> DomainResult<Option<i32>>;
    /// Reserve the next transaction id.
    ///
    /// Concurrent callers never receive the same id. An id is not reused
    /// even if its transaction is never saved.
    async fn next_id(&self) -> DomainResult<i32>;
    async fn save(&self, transaction: Transaction) -> DomainResult<()>;
}
