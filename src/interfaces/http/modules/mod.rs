pub mod billing;
pub mod customers;
pub mod health;
pub mod plans;
pub mod transactions;
