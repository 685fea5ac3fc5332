//! Customer statement assembled from rated transaction lines

use rust_decimal::Decimal;

use super::model::ChargeBreakdown;
use crate::domain::plan::{PhonePlan, PricingRule};
use crate::domain::transaction::Transaction;
use crate::domain::usage::UsageTotals;
use crate::shared::money::{format_currency, round_currency};

/// How a statement line was priced
#[derive(Debug, Clone, PartialEq)]
pub enum LineCharge {
    /// Metered plan rated against the customer's usage
    Rated {
        usage: UsageTotals,
        breakdown: ChargeBreakdown,
    },
    /// Flat-priced Unlimited plan; usage was never queried
    Unlimited(ChargeBreakdown),
    /// No pricing rule applies; shown without usage
    NotRateable { reason: String },
}

impl LineCharge {
    pub fn breakdown(&self) -> Option<&ChargeBreakdown> {
        match self {
            Self::Rated { breakdown, .. } | Self::Unlimited(breakdown) => Some(breakdown),
            Self::NotRateable { .. } => None,
        }
    }

    pub fn usage(&self) -> Option<&UsageTotals> {
        match self {
            Self::Rated { usage, .. } => Some(usage),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rated { .. } => "rated",
            Self::Unlimited(_) => "unlimited",
            Self::NotRateable { .. } => "not_rateable",
        }
    }
}

/// One transaction on a statement
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLine {
    pub transaction: Transaction,
    /// `None` when the transaction references a plan id missing from the plan table
    pub plan: Option<PhonePlan>,
    pub rule: Option<&'static PricingRule>,
    pub charge: LineCharge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub customer_id: i32,
    pub lines: Vec<StatementLine>,
}

impl Statement {
    pub fn new(customer_id: i32, lines: Vec<StatementLine>) -> Self {
        Self { customer_id, lines }
    }

    /// Sum of the rated lines at full precision.
    ///
    /// Unlimited lines are shown with their flat charge but are not part of
    /// the total; see [`Statement::unlimited_total`].
    pub fn grand_total(&self) -> Decimal {
        self.lines
            .iter()
            .filter_map(|line| match &line.charge {
                LineCharge::Rated { breakdown, .. } => Some(breakdown.total),
                _ => None,
            })
            .sum()
    }

    /// Flat charges of the Unlimited lines, reported apart from the total
    pub fn unlimited_total(&self) -> Decimal {
        self.lines
            .iter()
            .filter_map(|line| match &line.charge {
                LineCharge::Unlimited(breakdown) => Some(breakdown.total),
                _ => None,
            })
            .sum()
    }

    pub fn grand_total_rounded(&self) -> Decimal {
        round_currency(self.grand_total())
    }

    pub fn format_grand_total(&self) -> String {
        format_currency(self.grand_total())
    }

    pub fn not_rateable_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line.charge, LineCharge::NotRateable { .. }))
            .count()
    }
}
