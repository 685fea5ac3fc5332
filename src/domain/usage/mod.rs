//! Usage aggregate

pub mod model;
pub mod repository;

pub use model::{UsageRecord, UsageTotals};
pub use repository::UsageRepository;
