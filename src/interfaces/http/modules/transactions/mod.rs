//! Transactions module: make a transaction

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
