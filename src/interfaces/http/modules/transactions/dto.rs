//! Transaction DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Transaction;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTransactionRequest {
    #[validate(range(min = 1, message = "customer_id must be positive"))]
    pub customer_id: i32,
    #[validate(length(min = 1, max = 32, message = "phone_number is required"))]
    pub phone_number: String,
    /// `Auto` or `Manual`
    pub payment_type: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    pub transaction_id: i32,
    pub customer_id: i32,
    pub plan_id: i32,
    pub transaction_time: DateTime<Utc>,
    pub payment_type: String,
    pub amount: Option<Decimal>,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        Self {
            transaction_id: t.transaction_id,
            customer_id: t.customer_id,
            plan_id: t.plan_id,
            transaction_time: t.transaction_time,
            payment_type: t.payment_type.to_string(),
            amount: t.amount,
        }
    }
}
