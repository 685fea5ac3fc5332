//! Bank account repository interface

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::model::BankAccount;
use crate::shared::errors::DomainResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn find_for_customer(&self, customer_id: i32) -> DomainResult<Option<BankAccount>>;
    async fn save(&self, account: BankAccount) -> DomainResult<()>;
    /// Subtract `amount` from the customer's balance and return the new balance.
    ///
    /// Balances may go negative; no overdraft check is made.
    async fn debit(&self, customer_id: i32, amount: Decimal) -> DomainResult<Decimal>;
    /// Add `amount` to the customer's balance and return the new balance
    async fn credit(&self, customer_id: i32, amount: Decimal) -> DomainResult<Decimal>;
}
