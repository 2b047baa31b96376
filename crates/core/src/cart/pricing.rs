//! Fixed pricing constants applied when deriving cart totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price};

/// Tax rate, delivery fee, and free-delivery threshold for a cart.
///
/// Defaults: 10% tax, 3.99 delivery fee, free delivery above 50.00, USD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Fraction of the subtotal charged as tax (0.10 = 10%).
    pub tax_rate: Decimal,
    /// Flat delivery charge.
    pub delivery_fee: Price,
    /// Subtotals strictly above this amount ship free. `None` disables the waiver.
    pub free_delivery_threshold: Option<Price>,
    /// Currency used when rendering amounts.
    pub currency: CurrencyCode,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(10, 2),
            delivery_fee: Price::from_cents(399),
            free_delivery_threshold: Some(Price::from_cents(5000)),
            currency: CurrencyCode::USD,
        }
    }
}

impl PricingConfig {
    /// Delivery fee owed for a given subtotal.
    ///
    /// An empty cart owes nothing, so a zero subtotal is treated as waived.
    #[must_use]
    pub fn delivery_fee_for(&self, subtotal: Decimal, is_empty: bool) -> Decimal {
        if is_empty {
            return Decimal::ZERO;
        }
        match self.free_delivery_threshold {
            Some(threshold) if subtotal > threshold.amount() => Decimal::ZERO,
            _ => self.delivery_fee.amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_charged_at_threshold() {
        let config = PricingConfig::default();
        assert_eq!(
            config.delivery_fee_for(Decimal::new(5000, 2), false),
            Decimal::new(399, 2)
        );
    }

    #[test]
    fn test_fee_waived_above_threshold() {
        let config = PricingConfig::default();
        assert_eq!(
            config.delivery_fee_for(Decimal::new(5001, 2), false),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_fee_waived_for_empty_cart() {
        let config = PricingConfig::default();
        assert_eq!(config.delivery_fee_for(Decimal::ZERO, true), Decimal::ZERO);
    }

    #[test]
    fn test_no_threshold_always_charges() {
        let config = PricingConfig {
            free_delivery_threshold: None,
            ..PricingConfig::default()
        };
        assert_eq!(
            config.delivery_fee_for(Decimal::new(100_000, 2), false),
            Decimal::new(399, 2)
        );
    }
}
