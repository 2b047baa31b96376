//! Checkout and order history commands.
//!
//! # Usage
//!
//! ```bash
//! # Place an order from the current cart
//! foodcart checkout
//!
//! # List past orders, newest first
//! foodcart orders list
//!
//! # Mark an order delivered
//! foodcart orders status 5f0c... delivered
//! ```

use foodcart_core::{OrderHistory, OrderId, OrderStatus};
use tracing::{error, info};

use super::{CommandResult, open_cart};
use crate::catalog;
use crate::config::CliConfig;
use crate::file_store::{read_json_or_default, write_json};

/// Turn the cart into an order, record it, then empty the cart.
pub fn checkout(config: &CliConfig) -> CommandResult {
    // Read history first so an unreadable file fails before anything changes
    let path = config.orders_path();
    let mut history: OrderHistory = read_json_or_default(&path)?;

    let catalog = catalog::load(config.catalog_path.as_deref())?;
    let mut cart = open_cart(config);
    let currency = cart.config().currency;

    if let Some(minimum) = catalog.restaurant.minimum_order {
        let subtotal = cart.totals().subtotal;
        if !cart.is_empty() && subtotal < minimum.amount() {
            return Err(format!(
                "{} has a minimum order of {} (cart subtotal is {})",
                catalog.restaurant.name,
                currency.format(minimum.amount()),
                currency.format(subtotal.round_dp(2)),
            )
            .into());
        }
    }

    let order = cart.order_snapshot()?;
    let order_id = order.id;
    let total = order.totals.rounded().total;
    history.record(order);

    // The cart is only emptied once the order is on disk
    if let Err(e) = write_json(&path, &history) {
        error!(order_id = %order_id, error = %e, "Order history could not be saved, cart kept");
        return Err(e.into());
    }
    cart.clear_cart();

    info!(
        order_id = %order_id,
        "Order placed: {}",
        currency.format(total)
    );
    Ok(())
}

/// List past orders.
pub fn list(config: &CliConfig) -> CommandResult {
    let history: OrderHistory = read_json_or_default(&config.orders_path())?;
    if history.is_empty() {
        info!("No orders yet");
        return Ok(());
    }

    let currency = config.pricing.currency;
    for order in history.orders() {
        info!(
            "{}  {}  {} items  {}  [{}]",
            order.placed_at.format("%B %-d, %Y"),
            order.id,
            order.item_count(),
            currency.format(order.totals.rounded().total),
            order.status
        );
    }
    Ok(())
}

/// Change an order's status.
pub fn set_status(config: &CliConfig, order: &str, status: &str) -> CommandResult {
    let id: OrderId = order.parse()?;
    let status: OrderStatus = status.parse()?;

    let path = config.orders_path();
    let mut history: OrderHistory = read_json_or_default(&path)?;
    if !history.set_status(id, status) {
        return Err(format!("Order not found: {id}").into());
    }
    write_json(&path, &history)?;
    info!(order_id = %id, %status, "Order status updated");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use foodcart_core::CatalogId;
    use uuid::Uuid;

    use super::*;

    fn config_in(dir: &std::path::Path) -> CliConfig {
        let dir = dir.to_string_lossy().into_owned();
        CliConfig::from_lookup(|key| (key == "FOODCART_DATA_DIR").then(|| dir.clone())).unwrap()
    }

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("foodcart-orders-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_checkout_records_order_and_clears_cart() {
        let dir = scratch_dir();
        let config = config_in(&dir);
        crate::commands::cart::add(&config, "1", 2, &[]).unwrap();

        checkout(&config).unwrap();

        let history: OrderHistory = read_json_or_default(&config.orders_path()).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.orders()[0].item_count(), 2);
        assert!(open_cart(&config).is_empty());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_failed_history_write_keeps_cart() {
        let dir = scratch_dir();
        let config = config_in(&dir);
        crate::commands::cart::add(&config, "1", 2, &[]).unwrap();

        // A directory where the temp file should go makes the write fail
        fs::create_dir_all(config.orders_path().with_extension("json.tmp")).unwrap();

        assert!(checkout(&config).is_err());

        let cart = open_cart(&config);
        assert_eq!(cart.item_quantity(&CatalogId::new("1")), 2);
        let history: OrderHistory = read_json_or_default(&config.orders_path()).unwrap();
        assert!(history.is_empty());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_checkout_below_minimum_is_rejected() {
        let dir = scratch_dir();
        let config = config_in(&dir);
        // Caesar Salad at 9.99 is under the 15.00 minimum
        crate::commands::cart::add(&config, "3", 1, &[]).unwrap();

        assert!(checkout(&config).is_err());
        assert!(!open_cart(&config).is_empty());

        fs::remove_dir_all(dir).unwrap();
    }
}
