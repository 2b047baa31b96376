//! Cart line items and their identity.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CartError;
use crate::catalog::{CatalogItem, Customization};
use crate::types::{CatalogId, LineItemId, Price, Quantity};

/// Separator between the catalog ID and customization names in a line ID.
const KEY_SEPARATOR: char = '+';
/// Prefix for a literal separator or escape inside a key part.
const KEY_ESCAPE: char = '\\';

/// One distinct purchasable entry in the cart.
///
/// Name, price, and image are snapshots taken from the catalog when the
/// item was first added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Derived from `catalog_id` and the customization names.
    pub id: LineItemId,
    pub catalog_id: CatalogId,
    pub name: String,
    /// Unit price before customizations.
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: Quantity,
    /// Chosen add-ons in the order they were selected.
    #[serde(default)]
    pub selected_customizations: Vec<Customization>,
}

impl LineItem {
    pub(crate) fn from_catalog(
        item: &CatalogItem,
        quantity: Quantity,
        customizations: &[Customization],
    ) -> Self {
        Self {
            id: line_item_id(&item.id, customizations),
            catalog_id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity,
            selected_customizations: customizations.to_vec(),
        }
    }

    /// Sum of the customization surcharges for one unit.
    #[must_use]
    pub fn surcharge(&self) -> Decimal {
        self.selected_customizations
            .iter()
            .map(|c| c.price.amount())
            .sum()
    }

    /// Price of one unit including customizations.
    #[must_use]
    pub fn unit_price(&self) -> Decimal {
        self.price.amount() + self.surcharge()
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.unit_price() * Decimal::from(self.quantity.get())
    }

    /// Recompute the identity from the catalog ID and customizations.
    pub(crate) fn rekey(&mut self) {
        self.id = line_item_id(&self.catalog_id, &self.selected_customizations);
    }
}

/// Identity of the line holding `catalog_id` with the given customizations.
///
/// Customizations compare as a set of names, so selection order does not
/// affect the result. Separators inside the catalog ID or a name are
/// escaped, so distinct items never share a key.
///
/// ```
/// use foodcart_core::cart::line_item_id;
/// use foodcart_core::{CatalogId, Customization, Price};
///
/// let cheese = Customization::new("Extra Cheese", Price::from_cents(150));
/// let bacon = Customization::new("Bacon", Price::from_cents(200));
/// let id = CatalogId::new("1");
///
/// assert_eq!(line_item_id(&id, &[]).as_str(), "1");
/// assert_eq!(
///     line_item_id(&id, &[cheese.clone(), bacon.clone()]),
///     line_item_id(&id, &[bacon, cheese]),
/// );
/// ```
#[must_use]
pub fn line_item_id(catalog_id: &CatalogId, customizations: &[Customization]) -> LineItemId {
    let names: BTreeSet<&str> = customizations.iter().map(|c| c.name.as_str()).collect();
    let mut key = String::new();
    push_key_part(&mut key, catalog_id.as_str());
    for name in names {
        key.push(KEY_SEPARATOR);
        push_key_part(&mut key, name);
    }
    LineItemId::new(key)
}

fn push_key_part(key: &mut String, part: &str) {
    for ch in part.chars() {
        if ch == KEY_SEPARATOR || ch == KEY_ESCAPE {
            key.push(KEY_ESCAPE);
        }
        key.push(ch);
    }
}

/// Reject customization selections whose names are blank or repeated.
pub(crate) fn validate_customizations(customizations: &[Customization]) -> Result<(), CartError> {
    let mut seen = BTreeSet::new();
    for customization in customizations {
        if customization.name.trim().is_empty() {
            return Err(CartError::InvalidArgument(
                "customization name cannot be empty".to_owned(),
            ));
        }
        if !seen.insert(customization.name.as_str()) {
            return Err(CartError::InvalidArgument(format!(
                "customization selected twice: {}",
                customization.name
            )));
        }
    }
    Ok(())
}
