//! Saved delivery addresses.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::AddressId;

/// Errors from address book operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Address {0} cannot be empty")]
    MissingField(&'static str),
}

/// Address fields as entered, before an ID is assigned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewAddress {
    /// Label such as "Home" or "Work".
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zip_code
        )
    }
}

/// Saved addresses in the order they were added.
///
/// IDs are assigned sequentially and never reused while the book holds a
/// higher one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook(Vec<Address>);

impl AddressBook {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Save an address and return its new ID.
    ///
    /// Fields are trimmed; the name and street are required.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::MissingField`] if a required field is blank.
    pub fn add(&mut self, address: NewAddress) -> Result<AddressId, AddressError> {
        let name = address.name.trim();
        let street = address.street.trim();
        if name.is_empty() {
            return Err(AddressError::MissingField("name"));
        }
        if street.is_empty() {
            return Err(AddressError::MissingField("street"));
        }

        let id = AddressId::from(self.next_id());
        self.0.push(Address {
            id: id.clone(),
            name: name.to_owned(),
            street: street.to_owned(),
            city: address.city.trim().to_owned(),
            state: address.state.trim().to_owned(),
            zip_code: address.zip_code.trim().to_owned(),
        });
        Ok(id)
    }

    /// Remove an address. Returns `false` if no address has that ID.
    pub fn remove(&mut self, id: &AddressId) -> bool {
        let before = self.0.len();
        self.0.retain(|a| &a.id != id);
        self.0.len() != before
    }

    #[must_use]
    pub fn find(&self, id: &AddressId) -> Option<&Address> {
        self.0.iter().find(|a| &a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn next_id(&self) -> u64 {
        self.0
            .iter()
            .filter_map(|a| a.id.as_str().parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn home() -> NewAddress {
        NewAddress {
            name: "Home".to_owned(),
            street: " 123 Main St ".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip_code: "62701".to_owned(),
        }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut book = AddressBook::new();
        let first = book.add(home()).unwrap();
        let second = book.add(home()).unwrap();
        assert_eq!(first.as_str(), "1");
        assert_eq!(second.as_str(), "2");
        assert_eq!(book.len(), 2);
    }

    #[test]
    fn test_ids_not_reused_after_removing_earlier_entry() {
        let mut book = AddressBook::new();
        let first = book.add(home()).unwrap();
        book.add(home()).unwrap();
        assert!(book.remove(&first));
        assert_eq!(book.add(home()).unwrap().as_str(), "3");
    }

    #[test]
    fn test_add_trims_and_requires_fields() {
        let mut book = AddressBook::new();
        let id = book.add(home()).unwrap();
        assert_eq!(
            book.find(&id).unwrap().to_string(),
            "123 Main St, Springfield, IL 62701"
        );

        let missing_street = NewAddress {
            street: "  ".to_owned(),
            ..home()
        };
        assert_eq!(
            book.add(missing_street),
            Err(AddressError::MissingField("street"))
        );
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_remove_unknown_returns_false() {
        let mut book = AddressBook::new();
        book.add(home()).unwrap();
        assert!(!book.remove(&AddressId::new("99")));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_json_is_a_plain_list() {
        let mut book = AddressBook::new();
        book.add(home()).unwrap();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json[0]["zip_code"], "62701");
        let decoded: AddressBook = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, book);
    }
}
