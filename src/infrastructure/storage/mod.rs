//! Storage implementations

mod memory;
mod seed;

pub use memory::{
    InMemoryAccountRepository, InMemoryPlanRepository, InMemoryStorage,
    InMemoryTransactionRepository, InMemoryUsageRepository,
};
pub use seed::{SeedData, SeedError, SeedSummary};
