//! JSON file persistence.
//!
//! The cart lives in a single JSON file that plays the role browser local
//! storage plays for a web storefront: one key, rewritten on every change.
//! Order history and favorites use the same read/write helpers.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use foodcart_core::{CartStore, SerializedCart, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// [`CartStore`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CartStore for JsonFileStore {
    fn load(&self) -> Result<Option<SerializedCart>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(json) => SerializedCart::from_json(&json).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, cart: &SerializedCart) -> Result<(), StoreError> {
        write_atomic(&self.path, &cart.to_json()?)
    }
}

/// Read a JSON document, or the type's default if the file does not exist.
///
/// # Errors
///
/// Returns [`StoreError`] if the file exists but cannot be read or decoded.
pub fn read_json_or_default<T>(path: &Path) -> Result<T, StoreError>
where
    T: DeserializeOwned + Default,
{
    match fs::read_to_string(path) {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(T::default()),
        Err(e) => Err(e.into()),
    }
}

/// Write a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`StoreError`] if encoding or writing fails.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    write_atomic(path, &serde_json::to_string_pretty(value)?)
}

/// Write through a sibling temp file and rename, so readers never observe a
/// half-written document.
fn write_atomic(path: &Path, contents: &str) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
