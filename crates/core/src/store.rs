//! Persistence port for carts.
//!
//! The engine treats storage as a write-behind cache: it reads once at
//! construction and writes after every change, but the in-memory cart stays
//! authoritative. A failed write is logged and otherwise ignored.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::LineItem;

/// Current layout version of [`SerializedCart`].
pub const SERIALIZED_CART_VERSION: u32 = 1;

/// Errors raised by a [`CartStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The saved cart could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The saved cart was written by an incompatible version.
    #[error("Unsupported cart version: {0}")]
    UnsupportedVersion(u32),

    /// The store refused the operation (quota exceeded, disabled, ...).
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Plain serializable form of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedCart {
    pub version: u32,
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_code: Option<String>,
}

impl SerializedCart {
    /// Wrap line items at the current layout version.
    #[must_use]
    pub const fn new(items: Vec<LineItem>, promo_code: Option<String>) -> Self {
        Self {
            version: SERIALIZED_CART_VERSION,
            items,
            promo_code,
        }
    }

    /// Decode a cart from JSON, rejecting unknown versions.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] for malformed JSON and
    /// [`StoreError::UnsupportedVersion`] for a newer layout.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let cart: Self = serde_json::from_str(json)?;
        if cart.version != SERIALIZED_CART_VERSION {
            return Err(StoreError::UnsupportedVersion(cart.version));
        }
        Ok(cart)
    }

    /// Encode the cart as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Key-value style storage for a single cart.
pub trait CartStore {
    /// Load the previously saved cart, or `None` if nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the saved cart cannot be read or decoded.
    fn load(&self) -> Result<Option<SerializedCart>, StoreError>;

    /// Replace the saved cart.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the cart cannot be written.
    fn save(&mut self, cart: &SerializedCart) -> Result<(), StoreError>;
}

/// In-memory store holding the cart as a JSON string, like browser local storage.
///
/// Clones share the same slot, so a test can keep a handle while the engine
/// owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with raw contents.
    #[must_use]
    pub fn with_contents(raw: impl Into<String>) -> Self {
        let store = Self::default();
        store.slot.replace(Some(raw.into()));
        store
    }

    /// The raw saved contents, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Make subsequent writes fail, simulating an exceeded quota.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Option<SerializedCart>, StoreError> {
        self.slot
            .borrow()
            .as_deref()
            .map(SerializedCart::from_json)
            .transpose()
    }

    fn save(&mut self, cart: &SerializedCart) -> Result<(), StoreError> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable("quota exceeded".to_owned()));
        }
        let json = cart.to_json()?;
        self.slot.replace(Some(json));
        Ok(())
    }
}
