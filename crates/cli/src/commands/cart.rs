//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! # Add two burgers with bacon
//! foodcart cart add 1 -q 2 -c Bacon
//!
//! # Show the cart with totals
//! foodcart cart show
//!
//! # Set, decrement, or remove a line by its ID
//! foodcart cart set "1+Bacon" 3
//! foodcart cart decrement "1+Bacon"
//! foodcart cart remove "1+Bacon"
//!
//! # Empty the cart
//! foodcart cart clear
//! ```

use foodcart_core::{CartEngine, CatalogId, LineItemId};
use tracing::info;

use super::{CommandResult, open_cart};
use crate::catalog;
use crate::config::CliConfig;

/// Print the cart contents and totals.
pub fn show(config: &CliConfig) -> CommandResult {
    let cart = open_cart(config);
    for line in summary_lines(&cart) {
        info!("{line}");
    }
    Ok(())
}

/// Add a catalog item with optional customizations.
pub fn add(
    config: &CliConfig,
    item: &str,
    quantity: i64,
    customizations: &[String],
) -> CommandResult {
    let catalog = catalog::load(config.catalog_path.as_deref())?;
    let (item, customizations) =
        catalog::resolve(&catalog, &CatalogId::new(item), customizations)?;

    let mut cart = open_cart(config);
    let line_id = cart.add_item(item, quantity, &customizations)?;
    info!(
        line = %line_id,
        in_cart = cart.item_quantity(&item.id),
        "Added {} x {}",
        quantity,
        item.name
    );
    Ok(())
}

/// Remove a line entirely.
pub fn remove(config: &CliConfig, line: &str) -> CommandResult {
    let mut cart = open_cart(config);
    let id = LineItemId::new(line);
    let existed = cart.line(&id).is_some();
    cart.remove_item(&id);
    if existed {
        info!(line = %id, "Removed line");
    } else {
        info!(line = %id, "Line not in cart, nothing removed");
    }
    Ok(())
}

/// Take one unit off a line.
pub fn decrement(config: &CliConfig, line: &str) -> CommandResult {
    let mut cart = open_cart(config);
    let id = LineItemId::new(line);
    cart.decrement_item(&id);
    let remaining = cart.line(&id).map_or(0, |l| l.quantity.get());
    info!(line = %id, remaining, "Decremented line");
    Ok(())
}

/// Set a line's quantity; zero or below removes it.
pub fn set(config: &CliConfig, line: &str, quantity: i64) -> CommandResult {
    let mut cart = open_cart(config);
    let id = LineItemId::new(line);
    cart.update_quantity(&id, quantity)?;
    let now = cart.line(&id).map_or(0, |l| l.quantity.get());
    info!(line = %id, quantity = now, "Updated line");
    Ok(())
}

/// Empty the cart.
pub fn clear(config: &CliConfig) -> CommandResult {
    let mut cart = open_cart(config);
    cart.clear_cart();
    info!("Cart cleared");
    Ok(())
}

/// Human-readable cart summary, one entry per output line.
#[must_use]
pub fn summary_lines(cart: &CartEngine) -> Vec<String> {
    if cart.is_empty() {
        return vec!["Your cart is empty".to_string()];
    }

    let currency = cart.config().currency;
    let mut lines = Vec::with_capacity(cart.items().len() + 6);

    for item in cart.items() {
        let mut line = format!(
            "[{}] {} x {} @ {} = {}",
            item.id,
            item.quantity,
            item.name,
            currency.format(item.unit_price()),
            currency.format(item.line_total()),
        );
        if !item.selected_customizations.is_empty() {
            let names: Vec<&str> = item
                .selected_customizations
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            line.push_str(&format!(" ({})", names.join(", ")));
        }
        lines.push(line);
    }

    let totals = cart.totals().rounded();
    lines.push(format!("Subtotal:     {}", currency.format(totals.subtotal)));
    lines.push(format!("Delivery fee: {}", currency.format(totals.delivery_fee)));
    lines.push(format!("Tax:          {}", currency.format(totals.tax)));
    if let Some(promo) = cart.applied_promo() {
        lines.push(format!(
            "Promo {}:   {}",
            promo.code,
            currency.format(-totals.discount)
        ));
    }
    lines.push(format!("Total:        {}", currency.format(totals.total)));
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use foodcart_core::{CatalogItem, Customization, Price, PricingConfig};

    use super::*;

    #[test]
    fn test_empty_summary() {
        let cart = CartEngine::new(PricingConfig::default());
        assert_eq!(summary_lines(&cart), vec!["Your cart is empty"]);
    }

    #[test]
    fn test_summary_lists_lines_and_totals() {
        let mut cart = CartEngine::new(PricingConfig::default());
        let burger = CatalogItem::new("1", "Classic Burger", Price::from_cents(1299));
        cart.add_item(
            &burger,
            2,
            &[Customization::new("Bacon", Price::from_cents(200))],
        )
        .unwrap();
        cart.apply_promo("WELCOME").unwrap();

        let lines = summary_lines(&cart);
        assert_eq!(
            lines[0],
            "[1+Bacon] 2 x Classic Burger @ $14.99 = $29.98 (Bacon)"
        );
        assert!(lines.iter().any(|l| l.contains("-$5.00")));
        // 29.98 + 2.998 + 3.99 - 5.00 = 31.968
        assert_eq!(lines.last().unwrap(), "Total:        $31.97");
    }
}
