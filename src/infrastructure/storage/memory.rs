//! In-memory storage implementation
//!
//! Backs every repository with `DashMap` tables. Used by the binary in
//! place of a relational store and by tests.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rust_decimal::Decimal;

use crate::domain::plan::catalog;
use crate::domain::{
    AccountRepository, BankAccount, DomainError, DomainResult, PhoneNumber, PhonePlan,
    PlanRepository, RepositoryProvider, Transaction, TransactionRepository, UsageRecord,
    UsageRepository,
};

#[derive(Default)]
pub struct InMemoryPlanRepository {
    plans: DashMap<i32, PhonePlan>,
    phone_numbers: DashMap<String, PhoneNumber>,
}

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn find_by_id(&self, plan_id: i32) -> DomainResult<Option<PhonePlan>> {
        Ok(self.plans.get(&plan_id).map(|p| p.clone()))
    }

    async fn find_all(&self) -> DomainResult<Vec<PhonePlan>> {
        let mut plans: Vec<PhonePlan> = self.plans.iter().map(|e| e.value().clone()).collect();
        plans.sort_by_key(|p| p.plan_id);
        Ok(plans)
    }

    async fn save(&self, plan: PhonePlan) -> DomainResult<()> {
        self.plans.insert(plan.plan_id, plan);
        Ok(())
    }

    async fn find_phone_number(&self, phone_number: &str) -> DomainResult<Option<PhoneNumber>> {
        Ok(self.phone_numbers.get(phone_number).map(|n| n.clone()))
    }

    async fn assign_phone_number(&self, number: PhoneNumber) -> DomainResult<()> {
        if self.phone_numbers.contains_key(&number.phone_number) {
            return Err(DomainError::Validation(format!(
                "phone number {} is already assigned",
                number.phone_number
            )));
        }
        self.phone_numbers.insert(number.phone_number.clone(), number);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUsageRepository {
    records: DashMap<i32, Vec<UsageRecord>>,
}

#[async_trait]
impl UsageRepository for InMemoryUsageRepository {
    async fn find_for_customer(&self, customer_id: i32) -> DomainResult<Vec<UsageRecord>> {
        Ok(self
            .records
            .get(&customer_id)
            .map(|r| r.clone())
            .unwrap_or_default())
    }

    async fn record(&self, record: UsageRecord) -> DomainResult<()> {
        self.records.entry(record.customer_id).or_default().push(record);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTransactionRepository {
    transactions: DashMap<i32, Transaction>,
    /// Highest id handed out or saved
    last_id: AtomicI32,
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    async fn find_for_customer(&self, customer_id: i32) -> DomainResult<Vec<Transaction>> {
        let mut txs: Vec<Transaction> = self
            .transactions
            .iter()
            .filter(|e| e.customer_id == customer_id)
            .map(|e| e.value().clone())
            .collect();
        txs.sort_by_key(|t| (t.transaction_time, t.transaction_id));
        Ok(txs)
    }

    async fn find_by_id(&self, transaction_id: i32) -> DomainResult<Option<Transaction>> {
        Ok(self.transactions.get(&transaction_id).map(|t| t.clone()))
    }

    async fn max_id(&self) -> DomainResult<Option<i32>> {
        Ok(self.transactions.iter().map(|e| *e.key()).max())
    }

    async fn next_id(&self) -> DomainResult<i32> {
        Ok(self.last_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    async fn save(&self, transaction: Transaction) -> DomainResult<()> {
        let transaction_id = transaction.transaction_id;
        match self.transactions.entry(transaction_id) {
            Entry::Occupied(_) => Err(DomainError::Storage(format!(
                "duplicate transaction id {}",
                transaction_id
            ))),
            Entry::Vacant(slot) => {
                slot.insert(transaction);
                self.last_id.fetch_max(transaction_id, Ordering::SeqCst);
                Ok(())
            }
        }
    }
}

#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: DashMap<i32, BankAccount>,
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_for_customer(&self, customer_id: i32) -> DomainResult<Option<BankAccount>> {
        Ok(self.accounts.get(&customer_id).map(|a| a.clone()))
    }

    async fn save(&self, account: BankAccount) -> DomainResult<()> {
        self.accounts.insert(account.customer_id, account);
        Ok(())
    }

    async fn debit(&self, customer_id: i32, amount: Decimal) -> DomainResult<Decimal> {
        self.adjust(customer_id, -amount)
    }

    async fn credit(&self, customer_id: i32, amount: Decimal) -> DomainResult<Decimal> {
        self.adjust(customer_id, amount)
    }
}

impl InMemoryAccountRepository {
    fn adjust(&self, customer_id: i32, delta: Decimal) -> DomainResult<Decimal> {
        let mut account =
            self.accounts
                .get_mut(&customer_id)
                .ok_or_else(|| DomainError::NotFound {
                    entity: "BankAccount",
                    field: "customer_id",
                    value: customer_id.to_string(),
                })?;
        account.money += delta;
        Ok(account.money)
    }
}

/// Repository provider backed by in-memory tables
#[derive(Default)]
pub struct InMemoryStorage {
    plans: InMemoryPlanRepository,
    usage: InMemoryUsageRepository,
    transactions: InMemoryTransactionRepository,
    accounts: InMemoryAccountRepository,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose plan table mirrors the pricing catalog
    pub fn with_catalog_plans() -> Self {
        let storage = Self::new();
        for entry in catalog::entries() {
            storage
                .plans
                .plans
                .insert(entry.plan_id, PhonePlan::from(entry));
        }
        storage
    }
}

impl RepositoryProvider for InMemoryStorage {
    fn plans(&self) -> &dyn PlanRepository {
        &self.plans
    }

    fn usage(&self) -> &dyn UsageRepository {
        &self.usage
    }

    fn transactions(&self) -> &dyn TransactionRepository {
        &self.transactions
    }

    fn accounts(&self) -> &dyn AccountRepository {
        &self.accounts
    }
}
