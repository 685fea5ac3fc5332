//! Customers module: billing statements

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
