use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Unknown plan '{plan}' for provider {provider}")]
    UnknownPlan { provider: String, plan: String },

    #[error("Invalid usage value: {field}={value} (must be non-negative)")]
    InvalidUsageValue { field: &'static str, value: Decimal },

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether the error only affects a single statement line.
    ///
    /// Such errors mark the line as not rateable instead of failing the
    /// whole statement.
    pub fn is_line_recoverable(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownProvider(_)
                | DomainError::UnknownPlan { .. }
                | DomainError::InvalidUsageValue { .. }
        )
    }
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn lookup_and_usage_errors_are_line_recoverable() {
        assert!(DomainError::UnknownProvider("Sprint".into()).is_line_recoverable());
        assert!(DomainError::UnknownPlan {
            provider: "AT&T".into(),
            plan: "Family".into(),
        }
        .is_line_recoverable());
        assert!(DomainError::InvalidUsageValue {
            field: "total_minutes",
            value: dec!(-5),
        }
        .is_line_recoverable());
    }

    #[test]
    fn storage_errors_are_not_line_recoverable() {
        assert!(!DomainError::Storage("connection lost".into()).is_line_recoverable());
        assert!(!DomainError::NotFound {
            entity: "PhoneNumber",
            field: "phone_number",
            value: "555".into(),
        }
        .is_line_recoverable());
    }

    #[test]
    fn display_messages() {
        let err = DomainError::UnknownPlan {
            provider: "T-Mobile".into(),
            plan: "Pay for both".into(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown plan 'Pay for both' for provider T-Mobile"
        );
        let err = DomainError::InvalidUsageValue {
            field: "total_minutes",
            value: dec!(-5),
        };
        assert_eq!(
            err.to_string(),
            "Invalid usage value: total_minutes=-5 (must be non-negative)"
        );
    }
}
