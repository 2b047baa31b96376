//! Cart state engine.
//!
//! A [`CartEngine`] owns the ordered list of line items for one shopper and
//! is the only way to change it. Totals are derived on demand from the items,
//! so they can never drift from the list.
//!
//! # Example
//!
//! ```
//! use foodcart_core::{CartEngine, CatalogItem, Price, PricingConfig};
//! use rust_decimal::Decimal;
//!
//! let mut cart = CartEngine::new(PricingConfig::default());
//! let burger = CatalogItem::new("m1", "Classic Burger", Price::from_cents(1299));
//!
//! cart.add_item(&burger, 2, &[]).unwrap();
//! assert_eq!(cart.item_quantity(&burger.id), 2);
//! assert_eq!(cart.totals().subtotal, Decimal::new(2598, 2));
//! ```

mod error;
pub mod line_item;
mod pricing;
mod promo;
mod totals;

pub use error::CartError;
pub use line_item::{LineItem, line_item_id};
pub use pricing::PricingConfig;
pub use promo::Promo;
pub use totals::CartTotals;

use tracing::{debug, warn};

use crate::catalog::{CatalogItem, Customization};
use crate::orders::OrderRecord;
use crate::store::{CartStore, SerializedCart};
use crate::types::{CartState, CatalogId, LineItemId, Quantity};

/// The cart engine.
///
/// Construct one per shopper session and pass it explicitly to whatever
/// needs it; there is no global cart.
pub struct CartEngine {
    items: Vec<LineItem>,
    config: PricingConfig,
    promo: Option<Promo>,
    store: Option<Box<dyn CartStore>>,
}

impl std::fmt::Debug for CartEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartEngine")
            .field("items", &self.items)
            .field("config", &self.config)
            .field("promo", &self.promo)
            .field("store", &self.store.as_ref().map(|_| "[CartStore]"))
            .finish()
    }
}

impl CartEngine {
    /// Create an empty cart with no persistence.
    #[must_use]
    pub const fn new(config: PricingConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
            promo: None,
            store: None,
        }
    }

    /// Create a cart backed by `store`, hydrated from whatever it holds.
    ///
    /// An unreadable saved cart is logged and replaced by an empty one.
    #[must_use]
    pub fn with_store(config: PricingConfig, store: Box<dyn CartStore>) -> Self {
        let saved = match store.load() {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "Discarding unreadable saved cart");
                None
            }
        };

        let mut engine = Self {
            store: Some(store),
            ..Self::new(config)
        };
        if let Some(saved) = saved {
            engine.hydrate(saved);
        }
        engine
    }

    /// Rebuild state from a saved cart, re-deriving line IDs and merging
    /// any lines that turn out to share an identity. Lines that `add_item`
    /// would have rejected are dropped.
    fn hydrate(&mut self, saved: SerializedCart) {
        for mut line in saved.items {
            if line.catalog_id.is_blank() {
                warn!(line_id = %line.id, "Dropping saved line without a catalog id");
                continue;
            }
            if let Err(e) = line_item::validate_customizations(&line.selected_customizations) {
                warn!(line_id = %line.id, error = %e, "Dropping saved line");
                continue;
            }
            line.rekey();
            match self.items.iter_mut().find(|l| l.id == line.id) {
                Some(existing) => match existing.quantity.checked_add(line.quantity) {
                    Ok(quantity) => existing.quantity = quantity,
                    Err(e) => warn!(line_id = %line.id, error = %e, "Dropping saved line"),
                },
                None => self.items.push(line),
            }
        }

        self.promo = saved.promo_code.as_deref().and_then(|code| {
            let promo = Promo::lookup(code);
            if promo.is_none() {
                warn!(code, "Dropping saved promo code that is no longer valid");
            }
            promo
        });

        debug!(lines = self.items.len(), "Hydrated cart from store");
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by ID.
    #[must_use]
    pub fn line(&self, id: &LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|l| &l.id == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn state(&self) -> CartState {
        if self.items.is_empty() {
            CartState::Empty
        } else {
            CartState::NonEmpty
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|l| u64::from(l.quantity.get())).sum()
    }

    /// Quantity held for a catalog item, summed across every customization
    /// variant. Returns 0 if the item is not in the cart.
    #[must_use]
    pub fn item_quantity(&self, catalog_id: &CatalogId) -> u32 {
        self.items
            .iter()
            .filter(|l| &l.catalog_id == catalog_id)
            .fold(0_u32, |sum, l| sum.saturating_add(l.quantity.get()))
    }

    #[must_use]
    pub const fn config(&self) -> &PricingConfig {
        &self.config
    }

    #[must_use]
    pub const fn applied_promo(&self) -> Option<&Promo> {
        self.promo.as_ref()
    }

    /// Derive subtotal, tax, delivery fee, discount, and total.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.items, &self.config, self.promo.as_ref())
    }

    /// Serializable snapshot of the cart.
    #[must_use]
    pub fn snapshot(&self) -> SerializedCart {
        SerializedCart::new(
            self.items.clone(),
            self.promo.as_ref().map(|p| p.code.clone()),
        )
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add `quantity` units of a catalog item with the chosen customizations.
    ///
    /// If a line with the same catalog ID and customization set exists, its
    /// quantity grows; otherwise a new line is appended.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidArgument`] if `quantity` is not positive,
    /// the catalog ID is blank, a customization name is blank or repeated, or
    /// the merged quantity would overflow.
    pub fn add_item(
        &mut self,
        item: &CatalogItem,
        quantity: i64,
        customizations: &[Customization],
    ) -> Result<LineItemId, CartError> {
        let quantity = Quantity::try_from(quantity)?;
        if item.id.is_blank() {
            return Err(CartError::InvalidArgument(
                "catalog item is missing an id".to_owned(),
            ));
        }
        line_item::validate_customizations(customizations)?;

        let id = line_item_id(&item.id, customizations);
        if let Some(existing) = self.items.iter_mut().find(|l| l.id == id) {
            existing.quantity = existing.quantity.checked_add(quantity)?;
            debug!(line_id = %id, quantity = existing.quantity.get(), "Increased line quantity");
        } else {
            self.items
                .push(LineItem::from_catalog(item, quantity, customizations));
            debug!(line_id = %id, quantity = quantity.get(), "Added line to cart");
        }

        self.persist();
        Ok(id)
    }

    /// Remove a line regardless of its quantity. Unknown IDs are ignored.
    pub fn remove_item(&mut self, id: &LineItemId) {
        let before = self.items.len();
        self.items.retain(|l| &l.id != id);
        if self.items.len() == before {
            debug!(line_id = %id, "Remove ignored, line not in cart");
            return;
        }
        debug!(line_id = %id, "Removed line from cart");
        self.persist();
    }

    /// Take one unit off a line, removing the line when it reaches zero.
    /// Unknown IDs are ignored.
    pub fn decrement_item(&mut self, id: &LineItemId) {
        let Some(line) = self.items.iter_mut().find(|l| &l.id == id) else {
            debug!(line_id = %id, "Decrement ignored, line not in cart");
            return;
        };

        match line.quantity.decremented() {
            Some(quantity) => {
                line.quantity = quantity;
                debug!(line_id = %id, quantity = quantity.get(), "Decreased line quantity");
                self.persist();
            }
            None => self.remove_item(id),
        }
    }

    /// Set a line's quantity. Values below 1 remove the line; unknown IDs
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidArgument`] if `quantity` exceeds `u32::MAX`.
    pub fn update_quantity(&mut self, id: &LineItemId, quantity: i64) -> Result<(), CartError> {
        if quantity < 1 {
            self.remove_item(id);
            return Ok(());
        }

        let quantity = Quantity::try_from(quantity)?;
        let Some(line) = self.items.iter_mut().find(|l| &l.id == id) else {
            debug!(line_id = %id, "Update ignored, line not in cart");
            return Ok(());
        };
        if line.quantity == quantity {
            return Ok(());
        }

        line.quantity = quantity;
        debug!(line_id = %id, quantity = quantity.get(), "Set line quantity");
        self.persist();
        Ok(())
    }

    /// Empty the cart and drop any applied promo.
    pub fn clear_cart(&mut self) {
        if self.items.is_empty() && self.promo.is_none() {
            return;
        }
        self.items.clear();
        self.promo = None;
        debug!("Cleared cart");
        self.persist();
    }

    /// Apply a promo code, replacing any previously applied one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::UnknownPromoCode`] if the code is not recognised.
    pub fn apply_promo(&mut self, code: &str) -> Result<Promo, CartError> {
        let promo =
            Promo::lookup(code).ok_or_else(|| CartError::UnknownPromoCode(code.to_owned()))?;
        debug!(code = %promo.code, "Applied promo code");
        self.promo = Some(promo.clone());
        self.persist();
        Ok(promo)
    }

    /// Remove the applied promo code, if any.
    pub fn remove_promo(&mut self) {
        if self.promo.take().is_some() {
            debug!("Removed promo code");
            self.persist();
        }
    }

    /// Build an order record from the current cart without changing it.
    ///
    /// Callers that must store the order before the cart is emptied use this
    /// and call [`clear_cart`](Self::clear_cart) once the order is safe.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidArgument`] if the cart is empty.
    pub fn order_snapshot(&self) -> Result<OrderRecord, CartError> {
        if self.items.is_empty() {
            return Err(CartError::InvalidArgument(
                "cannot check out an empty cart".to_owned(),
            ));
        }

        Ok(OrderRecord::new(
            self.items.clone(),
            self.totals(),
            self.promo.as_ref().map(|p| p.code.clone()),
        ))
    }

    /// Snapshot the cart into an order record and clear it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidArgument`] if the cart is empty.
    pub fn checkout(&mut self) -> Result<OrderRecord, CartError> {
        let order = self.order_snapshot()?;
        debug!(order_id = %order.id, total = %order.totals.total, "Checked out cart");
        self.clear_cart();
        Ok(order)
    }

    /// Write the current state to the store, if one is attached.
    fn persist(&mut self) {
        if self.store.is_none() {
            return;
        }
        let snapshot = self.snapshot();
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(e) = store.save(&snapshot) {
            warn!(error = %e, "Failed to persist cart");
        }
    }
}
