//! Customer bank account

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    pub account_id: i32,
    pub customer_id: i32,
    pub money: Decimal,
}
