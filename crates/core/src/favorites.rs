//! Favorited catalog items.

use serde::{Deserialize, Serialize};

use crate::types::CatalogId;

/// An ordered set of favorited catalog IDs.
///
/// Favorites are keyed by catalog ID alone, matching how the cart counts
/// quantities per catalog item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites(Vec<CatalogId>);

impl Favorites {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Flip an item's favorite flag. Returns `true` if it is now a favorite.
    pub fn toggle(&mut self, id: &CatalogId) -> bool {
        if let Some(pos) = self.0.iter().position(|f| f == id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id.clone());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &CatalogId) -> bool {
        self.0.contains(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogId> {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores() {
        let mut favorites = Favorites::new();
        let id = CatalogId::new("1");
        assert!(favorites.toggle(&id));
        assert!(favorites.contains(&id));
        assert!(!favorites.toggle(&id));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_iteration_order_follows_insertion() {
        let mut favorites = Favorites::new();
        favorites.toggle(&CatalogId::new("3"));
        favorites.toggle(&CatalogId::new("1"));
        let ids: Vec<_> = favorites.iter().map(CatalogId::as_str).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }
}
