//! Transaction entity

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::shared::errors::DomainError;

/// How the customer pays for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
    Auto,
    Manual,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "Auto"),
            Self::Manual => write!(f, "Manual"),
        }
    }
}

impl FromStr for PaymentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Auto" => Ok(Self::Auto),
            "Manual" => Ok(Self::Manual),
            other => Err(DomainError::Validation(format!(
                "payment type must be Auto or Manual, got '{}'",
                other
            ))),
        }
    }
}

/// A billed transaction for one plan
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub transaction_id: i32,
    pub customer_id: i32,
    pub plan_id: i32,
    pub transaction_time: DateTime<Utc>,
    pub payment_type: PaymentType,
    /// Plan price plus tax; `None` for historical rows never charged
    pub amount: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_type_parse() {
        assert_eq!("Auto".parse::<PaymentType>().unwrap(), PaymentType::Auto);
        assert_eq!("Manual".parse::<PaymentType>().unwrap(), PaymentType::Manual);
        assert!(matches!(
            "Manuel".parse::<PaymentType>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn payment_type_display() {
        assert_eq!(PaymentType::Auto.to_string(), "Auto");
        assert_eq!(PaymentType::Manual.to_string(), "Manual");
    }
}
