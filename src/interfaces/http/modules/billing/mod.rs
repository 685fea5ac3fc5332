//! Billing module: stateless rating preview

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
