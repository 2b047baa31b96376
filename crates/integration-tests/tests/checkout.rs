//! Integration tests for promo codes, checkout, and order history.

use foodcart_core::{
    CartEngine, CartError, MemoryStore, OrderHistory, OrderStatus, Promo,
};
use foodcart_integration_tests::{bacon, classic_burger, flat_four_delivery, item};
use rust_decimal::Decimal;

// =============================================================================
// Promo Codes
// =============================================================================

#[test]
fn test_welcome_discount_applies_to_total() {
    let mut cart = CartEngine::new(flat_four_delivery());
    cart.add_item(&item("A", 1000), 1, &[]).unwrap();
    cart.add_item(&item("B", 500), 3, &[]).unwrap();
    cart.apply_promo("Welcome").unwrap();

    let totals = cart.totals();
    assert_eq!(totals.discount, Decimal::new(5, 0));
    assert_eq!(totals.total, Decimal::new(265, 1));
}

#[test]
fn test_discount_never_exceeds_order_value() {
    let mut cart = CartEngine::new(flat_four_delivery());
    cart.add_item(&item("A", 50), 1, &[]).unwrap();
    cart.apply_promo("WELCOME").unwrap();

    let totals = cart.totals();
    // 0.50 + 0.05 tax + 4.00 delivery
    assert_eq!(totals.discount, Decimal::new(455, 2));
    assert_eq!(totals.total, Decimal::ZERO);
}

#[test]
fn test_unknown_promo_is_rejected() {
    let mut cart = CartEngine::new(flat_four_delivery());
    cart.apply_promo("WELCOME").unwrap();
    assert_eq!(
        cart.apply_promo("FREEFOOD"),
        Err(CartError::UnknownPromoCode("FREEFOOD".to_owned()))
    );
    // The earlier code stays applied
    assert_eq!(cart.applied_promo(), Promo::lookup("welcome").as_ref());
}

#[test]
fn test_promo_on_empty_cart_has_no_effect() {
    let mut cart = CartEngine::new(flat_four_delivery());
    cart.apply_promo("WELCOME").unwrap();
    assert_eq!(cart.totals().total, Decimal::ZERO);
    assert_eq!(cart.totals().discount, Decimal::ZERO);
}

#[test]
fn test_remove_promo_restores_total() {
    let mut cart = CartEngine::new(flat_four_delivery());
    cart.add_item(&item("A", 1000), 1, &[]).unwrap();
    let before = cart.totals();
    cart.apply_promo("WELCOME").unwrap();
    cart.remove_promo();
    assert_eq!(cart.totals(), before);
}

// =============================================================================
// Checkout
// =============================================================================

#[test]
fn test_checkout_snapshots_and_clears() {
    let store = MemoryStore::new();
    let mut cart = CartEngine::with_store(flat_four_delivery(), Box::new(store.clone()));
    cart.add_item(&classic_burger(), 2, &[bacon()]).unwrap();
    cart.apply_promo("WELCOME").unwrap();
    let expected = cart.totals();

    let order = cart.checkout().unwrap();

    assert_eq!(order.items.len(), 1);
    assert_eq!(order.item_count(), 2);
    assert_eq!(order.totals, expected);
    assert_eq!(order.promo_code.as_deref(), Some("WELCOME"));
    assert_eq!(order.status, OrderStatus::Processing);

    assert!(cart.is_empty());
    assert!(cart.applied_promo().is_none());
    let reloaded = CartEngine::with_store(flat_four_delivery(), Box::new(store));
    assert!(reloaded.is_empty());
}

#[test]
fn test_checkout_empty_cart_fails() {
    let mut cart = CartEngine::new(flat_four_delivery());
    assert!(matches!(
        cart.checkout(),
        Err(CartError::InvalidArgument(_))
    ));
}

// =============================================================================
// Order History
// =============================================================================

#[test]
fn test_history_lists_newest_first() {
    let mut cart = CartEngine::new(flat_four_delivery());
    let mut history = OrderHistory::new();

    cart.add_item(&item("A", 1000), 1, &[]).unwrap();
    let first = cart.checkout().unwrap();
    history.record(first.clone());

    cart.add_item(&item("B", 500), 2, &[]).unwrap();
    let second = cart.checkout().unwrap();
    history.record(second.clone());

    assert_eq!(history.len(), 2);
    assert_eq!(history.orders()[0].id, second.id);
    assert_eq!(history.orders()[1].id, first.id);
}

#[test]
fn test_history_status_update_and_json() {
    let mut cart = CartEngine::new(flat_four_delivery());
    let mut history = OrderHistory::new();
    cart.add_item(&item("A", 1000), 1, &[]).unwrap();
    let order = cart.checkout().unwrap();
    let id = order.id;
    history.record(order);

    assert!(history.set_status(id, OrderStatus::Delivered));
    assert_eq!(history.find(id).unwrap().status, OrderStatus::Delivered);

    let json = serde_json::to_string(&history).unwrap();
    let decoded: OrderHistory = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, history);
}
