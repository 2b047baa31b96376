//! Integration tests for Foodcart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_engine` - Cart mutations, identity, and derived totals
//! - `cart_persistence` - Hydration from and write-back to a `CartStore`
//! - `checkout` - Checkout, order history, and promo codes
//!
//! This library holds the shared menu fixtures used by those tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use foodcart_core::{CatalogItem, Customization, Price, PricingConfig};
use rust_decimal::Decimal;

/// Menu item with the given ID and price in cents.
#[must_use]
pub fn item(id: &str, cents: u32) -> CatalogItem {
    CatalogItem::new(id, format!("Item {id}"), Price::from_cents(cents))
}

/// The "Classic Burger" from the default menu, with its add-ons.
#[must_use]
pub fn classic_burger() -> CatalogItem {
    let mut burger = CatalogItem::new("1", "Classic Burger", Price::from_cents(1299));
    burger.category = Some("Burgers".to_owned());
    burger.customizations = vec![extra_cheese(), bacon(), extra_patty()];
    burger
}

#[must_use]
pub fn extra_cheese() -> Customization {
    Customization::new("Extra Cheese", Price::from_cents(150))
}

#[must_use]
pub fn bacon() -> Customization {
    Customization::new("Bacon", Price::from_cents(200))
}

#[must_use]
pub fn extra_patty() -> Customization {
    Customization::new("Extra Patty", Price::from_cents(350))
}

/// 10% tax, 4.00 delivery, free delivery above 50.00.
#[must_use]
pub fn flat_four_delivery() -> PricingConfig {
    PricingConfig {
        tax_rate: Decimal::new(10, 2),
        delivery_fee: Price::from_cents(400),
        free_delivery_threshold: Some(Price::from_cents(5000)),
        ..PricingConfig::default()
    }
}
