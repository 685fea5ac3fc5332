//! Billing
//!
//! Charge breakdowns, the usage rater and customer statements.

pub mod model;
pub mod rater;
pub mod statement;

pub use model::ChargeBreakdown;
pub use rater::{flat_charge, rate_totals, rate_usage};
pub use statement::{LineCharge, Statement, StatementLine};
