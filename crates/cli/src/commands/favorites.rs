//! Favorites commands.

use foodcart_core::{CatalogId, Favorites};
use tracing::info;

use super::CommandResult;
use crate::catalog::{self, CatalogError};
use crate::config::CliConfig;
use crate::file_store::{read_json_or_default, write_json};

/// Flip an item's favorite flag.
pub fn toggle(config: &CliConfig, item: &str) -> CommandResult {
    let catalog = catalog::load(config.catalog_path.as_deref())?;
    let id = CatalogId::new(item);
    let item = catalog
        .find(&id)
        .ok_or_else(|| CatalogError::UnknownItem(id.clone()))?;

    let path = config.favorites_path();
    let mut favorites: Favorites = read_json_or_default(&path)?;
    let added = favorites.toggle(&id);
    write_json(&path, &favorites)?;

    if added {
        info!("Added {} to favorites", item.name);
    } else {
        info!("Removed {} from favorites", item.name);
    }
    Ok(())
}

/// List favorited items.
pub fn list(config: &CliConfig) -> CommandResult {
    let favorites: Favorites = read_json_or_default(&config.favorites_path())?;
    if favorites.is_empty() {
        info!("No favorites yet");
        return Ok(());
    }

    let catalog = catalog::load(config.catalog_path.as_deref())?;
    for id in favorites.iter() {
        match catalog.find(id) {
            Some(item) => info!("[{}] {}", id, item.name),
            None => info!("[{}] (no longer on the menu)", id),
        }
    }
    Ok(())
}
