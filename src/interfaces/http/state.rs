//! Shared handler state

use std::sync::Arc;
use std::time::Instant;

use crate::application::{BillingService, TransactionService, UsageService};
use crate::domain::RepositoryProvider;

#[derive(Clone)]
pub struct AppState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub billing: Arc<BillingService>,
    pub transactions: Arc<TransactionService>,
    pub usage: Arc<UsageService>,
    pub started_at: Arc<Instant>,
}

impl AppState {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            billing: Arc::new(BillingService::new(repos.clone())),
            transactions: Arc::new(TransactionService::new(repos.clone())),
            usage: Arc::new(UsageService::new(repos.clone())),
            repos,
            started_at: Arc::new(Instant::now()),
        }
    }
}
