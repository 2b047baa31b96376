//! Menu listing.

use foodcart_core::{CartEngine, CatalogItem, CurrencyCode, Favorites};
use tracing::info;

use super::{CommandResult, open_cart};
use crate::catalog;
use crate::config::CliConfig;
use crate::file_store::read_json_or_default;

/// Print the restaurant and its menu grouped by category.
pub fn show(config: &CliConfig) -> CommandResult {
    let catalog = catalog::load(config.catalog_path.as_deref())?;
    let favorites: Favorites = read_json_or_default(&config.favorites_path())?;
    let cart = open_cart(config);
    let currency = config.pricing.currency;

    let restaurant = &catalog.restaurant;
    info!(
        rating = restaurant.rating,
        delivery = restaurant.delivery_time.as_deref().unwrap_or("-"),
        "{}",
        restaurant.name
    );

    for category in catalog.categories() {
        info!("== {category} ==");
        for item in catalog.in_category(category) {
            for line in item_lines(item, currency, &favorites, &cart) {
                info!("{line}");
            }
        }
    }

    let uncategorized: Vec<_> = catalog.items.iter().filter(|i| i.category.is_none()).collect();
    if !uncategorized.is_empty() {
        info!("== Other ==");
        for item in uncategorized {
            for line in item_lines(item, currency, &favorites, &cart) {
                info!("{line}");
            }
        }
    }
    Ok(())
}

/// One menu entry: the item with its favorite marker and cart count,
/// followed by its customizations.
fn item_lines(
    item: &CatalogItem,
    currency: CurrencyCode,
    favorites: &Favorites,
    cart: &CartEngine,
) -> Vec<String> {
    let marker = if favorites.contains(&item.id) { "*" } else { " " };
    let in_cart = cart.item_quantity(&item.id);
    let mut lines = vec![format!(
        "{marker}[{}] {} {}{}",
        item.id,
        item.name,
        currency.format(item.price.amount()),
        if in_cart > 0 {
            format!("  (in cart: {in_cart})")
        } else {
            String::new()
        }
    )];
    lines.extend(item.customizations.iter().map(|customization| {
        format!(
            "      + {} {}",
            customization.name,
            currency.format(customization.price.amount())
        )
    }));
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use foodcart_core::{Customization, Price, PricingConfig};

    use super::*;

    #[test]
    fn test_uncategorized_item_shows_marker_and_cart_count() {
        let mut item = CatalogItem::new("9", "Daily Special", Price::from_cents(1100));
        item.customizations = vec![Customization::new("Side Salad", Price::from_cents(300))];
        assert!(item.category.is_none());

        let mut favorites = Favorites::new();
        favorites.toggle(&item.id);
        let mut cart = CartEngine::new(PricingConfig::default());
        cart.add_item(&item, 2, &[]).unwrap();

        let lines = item_lines(&item, CurrencyCode::USD, &favorites, &cart);
        assert_eq!(
            lines,
            vec![
                "*[9] Daily Special $11.00  (in cart: 2)".to_owned(),
                "      + Side Salad $3.00".to_owned(),
            ]
        );
    }

    #[test]
    fn test_plain_item_has_blank_marker() {
        let item = CatalogItem::new("4", "Pasta Carbonara", Price::from_cents(1699));
        let lines = item_lines(
            &item,
            CurrencyCode::USD,
            &Favorites::new(),
            &CartEngine::new(PricingConfig::default()),
        );
        assert_eq!(lines, vec![" [4] Pasta Carbonara $16.99".to_owned()]);
    }
}
