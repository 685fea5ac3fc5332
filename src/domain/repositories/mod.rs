//! Repository traits for the domain layer
//!
//! `RepositoryProvider` gives unified access to the per-aggregate
//! repositories. Consumers request only the repository they need:
//!
//! ```ignore
//! async fn handle(repos: &dyn RepositoryProvider) {
//!     let txs = repos.transactions().find_for_customer(7).await?;
//!     let usage = repos.usage().find_for_customer(7).await?;
//! }
//! ```

use super::account::AccountRepository;
use super::plan::PlanRepository;
use super::transaction::TransactionRepository;
use super::usage::UsageRepository;

pub trait RepositoryProvider: Send + Sync {
    fn plans(&self) -> &dyn PlanRepository;
    fn usage(&self) -> &dyn UsageRepository;
    fn transactions(&self) -> &dyn TransactionRepository;
    fn accounts(&self) -> &dyn AccountRepository;
}
