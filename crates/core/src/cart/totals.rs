//! Derived cart totals.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::{LineItem, PricingConfig, Promo};

/// Amounts derived from the line items, pricing config, and applied promo.
///
/// Values are exact; call [`CartTotals::rounded`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub delivery_fee: Decimal,
    /// Promo discount, never more than the pre-discount total.
    pub discount: Decimal,
    pub total: Decimal,
}

impl CartTotals {
    /// Compute totals for a set of line items.
    #[must_use]
    pub fn compute(items: &[LineItem], config: &PricingConfig, promo: Option<&Promo>) -> Self {
        let subtotal: Decimal = items.iter().map(LineItem::line_total).sum();
        let tax = subtotal * config.tax_rate;
        let delivery_fee = config.delivery_fee_for(subtotal, items.is_empty());
        let gross = subtotal + tax + delivery_fee;
        let discount = promo.map_or(Decimal::ZERO, |p| p.discount.amount().min(gross));

        Self {
            subtotal,
            tax,
            delivery_fee,
            discount,
            total: gross - discount,
        }
    }

    /// Round every amount to cents, halves away from zero.
    #[must_use]
    pub fn rounded(&self) -> Self {
        let round = |d: Decimal| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        Self {
            subtotal: round(self.subtotal),
            tax: round(self.tax),
            delivery_fee: round(self.delivery_fee),
            discount: round(self.discount),
            total: round(self.total),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::CatalogItem;
    use crate::types::{Price, Quantity};

    fn line(id: &str, cents: u32, quantity: u32) -> LineItem {
        let item = CatalogItem::new(id, id, Price::from_cents(cents));
        LineItem::from_catalog(&item, Quantity::new(quantity).unwrap(), &[])
    }

    #[test]
    fn test_empty_cart_is_all_zero() {
        let totals = CartTotals::compute(&[], &PricingConfig::default(), None);
        assert_eq!(totals, CartTotals::default());
    }

    #[test]
    fn test_discount_capped_at_gross() {
        let config = PricingConfig {
            tax_rate: Decimal::ZERO,
            delivery_fee: Price::ZERO,
            ..PricingConfig::default()
        };
        let promo = Promo::lookup("WELCOME").unwrap();
        let totals = CartTotals::compute(&[line("w", 200, 1)], &config, Some(&promo));
        assert_eq!(totals.discount, Decimal::new(2, 0));
        assert_eq!(totals.total, Decimal::ZERO);
    }

    #[test]
    fn test_promo_reduces_total() {
        let promo = Promo::lookup("WELCOME").unwrap();
        let items = [line("a", 1000, 1), line("b", 500, 3)];
        let config = PricingConfig {
            delivery_fee: Price::from_cents(400),
            ..PricingConfig::default()
        };
        let totals = CartTotals::compute(&items, &config, Some(&promo));
        assert_eq!(totals.total, Decimal::new(265, 1));
    }

    #[test]
    fn test_rounded() {
        let items = [line("a", 333, 1)];
        let totals = CartTotals::compute(&items, &PricingConfig::default(), None).rounded();
        // 3.33 * 0.10 = 0.333
        assert_eq!(totals.tax, Decimal::new(33, 2));
        // 3.33 + 0.333 + 3.99 = 7.653
        assert_eq!(totals.total, Decimal::new(765, 2));
    }
}
