//! Transaction aggregate

pub mod model;
pub mod repository;

pub use model::{PaymentType, Transaction};
pub use repository::TransactionRepository;
