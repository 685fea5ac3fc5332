//! Provider, plan variant and pricing rule types

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::errors::DomainError;

/// Carriers resold by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Provider {
    #[serde(rename = "AT&T")]
    Att,
    #[serde(rename = "Verizon")]
    Verizon,
    #[serde(rename = "T-Mobile")]
    TMobile,
    #[serde(rename = "Boost Mobile")]
    BoostMobile,
    #[serde(rename = "Metro PCs")]
    MetroPcs,
    #[serde(rename = "Straight Talk")]
    StraightTalk,
}

impl Provider {
    pub const ALL: [Provider; 6] = [
        Provider::Att,
        Provider::Verizon,
        Provider::TMobile,
        Provider::BoostMobile,
        Provider::MetroPcs,
        Provider::StraightTalk,
    ];

    /// Display name, as stored in the provider table
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Att => "AT&T",
            Self::Verizon => "Verizon",
            Self::TMobile => "T-Mobile",
            Self::BoostMobile => "Boost Mobile",
            Self::MetroPcs => "Metro PCs",
            Self::StraightTalk => "Straight Talk",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the display name.
impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DomainError::UnknownProvider(s.to_string()))
    }
}

/// Billing shape of a plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanVariant {
    /// Minutes free, data billed per GB
    UnlimitedMinutesPayForData,
    /// Data free, minutes billed per minute
    UnlimitedDataPayForMinutes,
    /// Minutes and data both billed
    PayForBoth,
    /// Flat price only
    Unlimited,
}

impl PlanVariant {
    pub const ALL: [PlanVariant; 4] = [
        PlanVariant::UnlimitedMinutesPayForData,
        PlanVariant::UnlimitedDataPayForMinutes,
        PlanVariant::PayForBoth,
        PlanVariant::Unlimited,
    ];

    /// Plan name as it appears in the plan table
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UnlimitedMinutesPayForData => "Unlimited Minutes PAY for Data",
            Self::UnlimitedDataPayForMinutes => "Unlimited Data PAY for Minutes",
            Self::PayForBoth => "Pay for both",
            Self::Unlimited => "Unlimited",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }

    pub fn meters_minutes(&self) -> bool {
        matches!(self, Self::UnlimitedDataPayForMinutes | Self::PayForBoth)
    }

    pub fn meters_data(&self) -> bool {
        matches!(self, Self::UnlimitedMinutesPayForData | Self::PayForBoth)
    }
}

impl fmt::Display for PlanVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Charge formula for one (provider, plan) pair.
///
/// `call_limit` and `data_limit` are informational only; usage beyond them
/// is not capped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRule {
    pub provider: Provider,
    pub variant: PlanVariant,
    /// Flat monthly charge
    pub base_price: Decimal,
    /// Flat add-on, independent of usage
    pub tax: Decimal,
    /// Minutes figure shown to the customer
    pub call_limit: Option<u32>,
    /// GB figure shown to the customer
    pub data_limit: Option<u32>,
    pub price_per_minute: Option<Decimal>,
    pub price_per_gb: Option<Decimal>,
}

impl PricingRule {
    pub fn plan_name(&self) -> &'static str {
        self.variant.label()
    }

    /// Non-metered portion of the charge
    pub fn flat_price(&self) -> Decimal {
        self.base_price + self.tax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_parses_exact_names_only() {
        assert_eq!("AT&T".parse::<Provider>().unwrap(), Provider::Att);
        assert_eq!("Metro PCs".parse::<Provider>().unwrap(), Provider::MetroPcs);
        assert_eq!(
            "verizon".parse::<Provider>(),
            Err(DomainError::UnknownProvider("verizon".into()))
        );
        assert!("Sprint".parse::<Provider>().is_err());
        assert!(" AT&T".parse::<Provider>().is_err());
    }

    #[test]
    fn provider_display_round_trips_through_from_str() {
        for provider in Provider::ALL {
            assert_eq!(provider.to_string().parse::<Provider>().unwrap(), provider);
        }
    }

    #[test]
    fn provider_serializes_as_display_name() {
        let json = serde_json::to_string(&Provider::BoostMobile).unwrap();
        assert_eq!(json, "\"Boost Mobile\"");
    }

    #[test]
    fn variant_labels() {
        assert_eq!(
            PlanVariant::from_label("Unlimited Minutes PAY for Data"),
            Some(PlanVariant::UnlimitedMinutesPayForData)
        );
        assert_eq!(PlanVariant::from_label("Pay for both"), Some(PlanVariant::PayForBoth));
        assert_eq!(PlanVariant::from_label("pay for both"), None);
        assert_eq!(PlanVariant::Unlimited.to_string(), "Unlimited");
    }

    #[test]
    fn variant_metering() {
        assert!(PlanVariant::PayForBoth.meters_minutes());
        assert!(PlanVariant::PayForBoth.meters_data());
        assert!(!PlanVariant::UnlimitedMinutesPayForData.meters_minutes());
        assert!(!PlanVariant::UnlimitedDataPayForMinutes.meters_data());
        assert!(!PlanVariant::Unlimited.meters_minutes());
        assert!(!PlanVariant::Unlimited.meters_data());
    }
}
