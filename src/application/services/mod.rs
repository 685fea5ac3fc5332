pub mod billing;
pub mod transaction;
pub mod usage;

pub use billing::BillingService;
pub use transaction::TransactionService;
pub use usage::{CustomerUsage, UsageService};
