//! Subcommand implementations.
//!
//! Every command opens its own [`CartEngine`] over the JSON file store, runs
//! one operation, and reports through `tracing`.

pub mod addresses;
pub mod cart;
pub mod favorites;
pub mod menu;
pub mod orders;
pub mod promo;

use foodcart_core::CartEngine;

use crate::config::CliConfig;
use crate::file_store::JsonFileStore;

/// Result type shared by all commands.
pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Open the persisted cart.
#[must_use]
pub fn open_cart(config: &CliConfig) -> CartEngine {
    CartEngine::with_store(
        config.pricing.clone(),
        Box::new(JsonFileStore::new(config.cart_path())),
    )
}
