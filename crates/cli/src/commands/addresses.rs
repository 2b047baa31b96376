//! Saved address commands.
//!
//! # Usage
//!
//! ```bash
//! foodcart addresses add --name Home --street "123 Main St" --city Springfield --state IL --zip 62701
//! foodcart addresses list
//! foodcart addresses remove 1
//! ```

use foodcart_core::{AddressBook, AddressId, NewAddress};
use tracing::info;

use super::CommandResult;
use crate::config::CliConfig;
use crate::file_store::{read_json_or_default, write_json};

/// Save a new address.
pub fn add(config: &CliConfig, address: NewAddress) -> CommandResult {
    let path = config.addresses_path();
    let mut book: AddressBook = read_json_or_default(&path)?;
    let id = book.add(address)?;
    write_json(&path, &book)?;
    info!(address_id = %id, "Address saved");
    Ok(())
}

/// Delete a saved address.
pub fn remove(config: &CliConfig, id: &str) -> CommandResult {
    let id = AddressId::new(id);
    let path = config.addresses_path();
    let mut book: AddressBook = read_json_or_default(&path)?;
    if !book.remove(&id) {
        return Err(format!("Address not found: {id}").into());
    }
    write_json(&path, &book)?;
    info!(address_id = %id, "Address removed");
    Ok(())
}

/// List saved addresses.
pub fn list(config: &CliConfig) -> CommandResult {
    let book: AddressBook = read_json_or_default(&config.addresses_path())?;
    if book.is_empty() {
        info!("No saved addresses");
        return Ok(());
    }
    for address in book.iter() {
        info!("[{}] {}: {}", address.id, address.name, address);
    }
    Ok(())
}
