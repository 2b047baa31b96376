//! Read-only menu records supplied by the catalog provider.
//!
//! The cart engine copies what it needs out of a [`CatalogItem`] when an item
//! is added; it never re-reads or validates the catalog afterwards.

use serde::{Deserialize, Serialize};

use crate::types::{CatalogId, Price};

/// An optional named add-on with its own additive price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customization {
    /// Display name, also the customization's identity within an item.
    pub name: String,
    /// Surcharge applied once per unit of quantity.
    pub price: Price,
}

impl Customization {
    /// Create a customization.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A purchasable menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: CatalogId,
    pub name: String,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Add-ons offered for this item.
    #[serde(default)]
    pub customizations: Vec<Customization>,
}

impl CatalogItem {
    /// Create an item with only the fields the cart requires.
    #[must_use]
    pub fn new(id: impl Into<CatalogId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: None,
            description: None,
            category: None,
            customizations: Vec::new(),
        }
    }

    /// Look up an offered customization by name (case-insensitive).
    #[must_use]
    pub fn customization(&self, name: &str) -> Option<&Customization> {
        self.customizations
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }
}

/// Restaurant summary shown above the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    #[serde(default)]
    pub rating: f32,
    /// Human-readable window, e.g. "30-45 min".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_order: Option<Price>,
}

/// A restaurant and its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub restaurant: Restaurant,
    pub items: Vec<CatalogItem>,
}

impl Catalog {
    /// Find a menu item by ID.
    #[must_use]
    pub fn find(&self, id: &CatalogId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Distinct categories in menu order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for category in self.items.iter().filter_map(|item| item.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Items in a category, in menu order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a CatalogItem> {
        self.items
            .iter()
            .filter(move |item| item.category.as_deref() == Some(category))
    }
}
