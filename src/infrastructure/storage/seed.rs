//! Seed data loaded into the store at startup
//!
//! A TOML file with `[[accounts]]`, `[[phone_numbers]]`, `[[transactions]]`
//! and `[[usage]]` tables. Amounts are decimal strings and times are
//! RFC 3339 strings:
//!
//! ```toml
//! [[accounts]]
//! account_id = 5
//! customer_id = 1
//! money = "91.23"
//!
//! [[usage]]
//! customer_id = 1
//! recorded_at = "2022-11-03T09:22:00Z"
//! duration = "11.00"
//! data_usage = "1.10"
//! ```

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::domain::{
    BankAccount, DomainError, PaymentType, PhoneNumber, RepositoryProvider, Transaction,
    UsageRecord,
};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to apply seed data: {0}")]
    Apply(#[from] DomainError),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub accounts: Vec<SeedAccount>,
    pub phone_numbers: Vec<SeedPhoneNumber>,
    pub transactions: Vec<SeedTransaction>,
    pub usage: Vec<SeedUsage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedAccount {
    pub account_id: i32,
    pub customer_id: i32,
    pub money: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedPhoneNumber {
    pub phone_number_id: i32,
    pub plan_id: i32,
    pub customer_id: i32,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedTransaction {
    pub transaction_id: i32,
    pub customer_id: i32,
    pub plan_id: i32,
    pub transaction_time: DateTime<Utc>,
    /// `Auto` or `Manual`
    pub payment_type: String,
    /// Absent for historical rows that were never charged
    #[serde(default)]
    pub amount: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedUsage {
    pub customer_id: i32,
    pub recorded_at: DateTime<Utc>,
    pub duration: Decimal,
    pub data_usage: Decimal,
}

/// Rows written by [`SeedData::apply`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub accounts: usize,
    pub phone_numbers: usize,
    pub transactions: usize,
    pub usage: usize,
}

impl SeedData {
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, SeedError> {
        Ok(toml::from_str(raw)?)
    }

    /// Write every row into the store.
    ///
    /// Payment types are checked before the first write. A phone number that
    /// is already assigned or a duplicate transaction id fails the seed.
    pub async fn apply(&self, repos: &dyn RepositoryProvider) -> Result<SeedSummary, SeedError> {
        let payment_types = self
            .transactions
            .iter()
            .map(|t| t.payment_type.parse::<PaymentType>())
            .collect::<Result<Vec<_>, _>>()?;

        for a in &self.accounts {
            repos
                .accounts()
                .save(BankAccount {
                    account_id: a.account_id,
                    customer_id: a.customer_id,
                    money: a.money,
                })
                .await?;
        }

        for n in &self.phone_numbers {
            repos
                .plans()
                .assign_phone_number(PhoneNumber {
                    phone_number_id: n.phone_number_id,
                    plan_id: n.plan_id,
                    customer_id: n.customer_id,
                    phone_number: n.phone_number.clone(),
                })
                .await?;
        }

        for (t, payment_type) in self.transactions.iter().zip(payment_types) {
            repos
                .transactions()
                .save(Transaction {
                    transaction_id: t.transaction_id,
                    customer_id: t.customer_id,
                    plan_id: t.plan_id,
                    transaction_time: t.transaction_time,
                    payment_type,
                    amount: t.amount,
                })
                .await?;
        }

        for u in &self.usage {
            repos
                .usage()
                .record(UsageRecord {
                    customer_id: u.customer_id,
                    duration: u.duration,
                    data_usage: u.data_usage,
                    recorded_at: u.recorded_at,
                })
                .await?;
        }

        let summary = SeedSummary {
            accounts: self.accounts.len(),
            phone_numbers: self.phone_numbers.len(),
            transactions: self.transactions.len(),
            usage: self.usage.len(),
        };
        info!(
            "Seeded {} accounts, {} phone numbers, {} transactions, {} call records",
            summary.accounts, summary.phone_numbers, summary.transactions, summary.usage
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{BillingService, TransactionService};
    use crate::infrastructure::storage::InMemoryStorage;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use std::sync::Arc;

    const DEMO: &str = include_str!("../../../demo/seed.toml");

    async fn demo_store() -> Arc<InMemoryStorage> {
        let storage = Arc::new(InMemoryStorage::with_catalog_plans());
        SeedData::parse(DEMO)
            .unwrap()
            .apply(storage.as_ref())
            .await
            .unwrap();
        storage
    }

    #[tokio::test]
    async fn demo_seed_loads_every_table() {
        let storage = Arc::new(InMemoryStorage::with_catalog_plans());
        let summary = SeedData::parse(DEMO)
            .unwrap()
            .apply(storage.as_ref())
            .await
            .unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                accounts: 10,
                phone_numbers: 14,
                transactions: 20,
                usage: 138,
            }
        );

        let number = storage
            .plans()
            .find_phone_number("123-456-7890")
            .await
            .unwrap()
            .unwrap();
        assert_eq!((number.customer_id, number.plan_id), (1, 2));
        let account = storage.accounts().find_for_customer(1).await.unwrap().unwrap();
        assert_eq!(account.money, dec!(91.23));
    }

    #[tokio::test]
    async fn seeded_customer_gets_a_rated_statement() {
        let storage = demo_store().await;
        let statement = BillingService::new(storage)
            .customer_statement(1)
            .await
            .unwrap();

        // Verizon data plan, 8.266 GB over both months: 25.98 + 8.266 * 0.15
        assert_eq!(statement.lines.len(), 2);
        assert_eq!(statement.lines[0].transaction.transaction_id, 11);
        assert_eq!(statement.format_grand_total(), "$54.44");
        assert_eq!(statement.not_rateable_count(), 0);
    }

    #[tokio::test]
    async fn seeded_unlimited_customer_totals_flat_charges_apart() {
        let storage = demo_store().await;
        let statement = BillingService::new(storage)
            .customer_statement(4)
            .await
            .unwrap();
        assert_eq!(statement.grand_total(), Decimal::ZERO);
        assert_eq!(statement.unlimited_total(), dec!(129.90));
    }

    #[tokio::test]
    async fn new_transactions_continue_after_seeded_ids() {
        let storage = demo_store().await;
        let tx = TransactionService::new(storage)
            .make_transaction(1, "123-456-7890", PaymentType::Manual)
            .await
            .unwrap();
        assert_eq!(tx.transaction_id, 21);
    }

    #[tokio::test]
    async fn bad_payment_type_writes_nothing() {
        let seed = SeedData::parse(
            r#"
            [[accounts]]
            account_id = 1
            customer_id = 1
            money = "10.00"

            [[transactions]]
            transaction_id = 1
            customer_id = 1
            plan_id = 2
            transaction_time = "2022-11-30T10:30:00Z"
            payment_type = "Cash"
            "#,
        )
        .unwrap();

        let storage = InMemoryStorage::new();
        let err = seed.apply(&storage).await.unwrap_err();
        assert!(matches!(err, SeedError::Apply(DomainError::Validation(_))));
        assert!(storage.accounts().find_for_customer(1).await.unwrap().is_none());
    }

    #[test]
    fn load_reports_missing_file_and_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let missing = SeedData::load(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(SeedError::Io { .. })));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[usage]\ncustomer_id = ").unwrap();
        assert!(matches!(SeedData::load(file.path()), Err(SeedError::Parse(_))));
    }

    #[test]
    fn empty_file_is_an_empty_seed() {
        assert_eq!(SeedData::parse("").unwrap(), SeedData::default());
    }
}
