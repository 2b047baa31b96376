//! Foodcart Core - Cart state engine and shared types.
//!
//! This crate provides the cart engine and the domain types used by every
//! Foodcart component:
//! - `cli` - Command-line storefront that drives the engine
//! - `integration-tests` - Behavioural tests for the engine
//!
//! # Architecture
//!
//! The core crate performs no file or network I/O. Persistence is reached
//! through the [`store::CartStore`] port, which callers inject when they
//! construct a [`cart::CartEngine`].
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, quantities, and statuses
//! - [`catalog`] - Read-only menu records supplied by the catalog provider
//! - [`cart`] - The cart engine, line items, promo codes, and derived totals
//! - [`store`] - Persistence port and an in-memory implementation
//! - [`orders`] - Order records produced at checkout and the order history
//! - [`favorites`] - Favorited catalog items
//! - [`addresses`] - Saved delivery addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod addresses;
pub mod cart;
pub mod catalog;
pub mod favorites;
pub mod orders;
pub mod store;
pub mod types;

pub use addresses::{Address, AddressBook, AddressError, NewAddress};
pub use cart::{CartEngine, CartError, CartTotals, LineItem, PricingConfig, Promo};
pub use catalog::{Catalog, CatalogItem, Customization, Restaurant};
pub use favorites::Favorites;
pub use orders::{OrderHistory, OrderRecord};
pub use store::{CartStore, MemoryStore, SerializedCart, StoreError};
pub use types::*;
