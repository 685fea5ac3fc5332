//! Bank account aggregate

pub mod model;
pub mod repository;

pub use model::BankAccount;
pub use repository::AccountRepository;
