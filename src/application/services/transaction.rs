//! Transaction service: charges a customer for the plan behind a phone number

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::domain::{DomainError, DomainResult, PaymentType, RepositoryProvider, Transaction};

pub struct TransactionService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TransactionService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Record a transaction for the plan assigned to `phone_number` and debit
    /// the customer's bank account.
    ///
    /// The amount is the plan price plus tax. Metered usage is not part of
    /// the recorded amount.
    pub async fn make_transaction(
        &self,
        customer_id: i32,
        phone_number: &str,
        payment_type: PaymentType,
    ) -> DomainResult<Transaction> {
        let number = self
            .repos
            .plans()
            .find_phone_number(phone_number)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "PhoneNumber",
                field: "phone_number",
                value: phone_number.to_string(),
            })?;

        let plan = self
            .repos
            .plans()
            .find_by_id(number.plan_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "PhonePlan",
                field: "plan_id",
                value: number.plan_id.to_string(),
            })?;

        let amount = plan.flat_amount();
        let transaction_id = self.repos.transactions().next_id().await?;

        // fails with NotFound before anything is stored
        let balance = self.repos.accounts().debit(customer_id, amount).await?;

        let transaction = Transaction {
            transaction_id,
            customer_id,
            plan_id: plan.plan_id,
            transaction_time: Utc::now(),
            payment_type,
            amount: Some(amount),
        };
        if let Err(e) = self.repos.transactions().save(transaction.clone()).await {
            warn!(
                "Transaction {} could not be stored, crediting {} back to customer {}: {}",
                transaction_id, amount, customer_id, e
            );
            self.repos.accounts().credit(customer_id, amount).await?;
            return Err(e);
        }
        debug!(
            "Transaction {} records price + tax only; metered usage is not charged",
            transaction_id
        );

        info!(
            "Transaction {} for customer {} ({} / {}): amount {}, balance {}",
            transaction_id, customer_id, plan.provider, plan.plan_name, amount, balance
        );

        Ok(transaction)
    }
}
