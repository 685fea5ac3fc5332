//! Currency helpers
//!
//! Amounts are carried at full precision and only rounded when displayed.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to cents for display.
///
/// The result always carries exactly two decimal places.
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    cents.rescale(2);
    cents
}

/// Format an amount as `$12.34`.
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", round_currency(amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_currency(dec!(0.125)), dec!(0.13));
        assert_eq!(round_currency(dec!(0.124)), dec!(0.12));
        assert_eq!(round_currency(dec!(30.78)), dec!(30.78));
    }

    #[test]
    fn rounded_amounts_always_show_cents() {
        assert_eq!(round_currency(Decimal::ZERO).to_string(), "0.00");
        assert_eq!(round_currency(dec!(10) * Decimal::ZERO).to_string(), "0.00");
        assert_eq!(round_currency(dec!(2.0) * dec!(0.09)).to_string(), "0.18");
        assert_eq!(round_currency(dec!(64)).to_string(), "64.00");
    }

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(format_currency(dec!(30)), "$30.00");
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(33.2600)), "$33.26");
        assert_eq!(format_currency(dec!(1.005)), "$1.01");
    }
}
