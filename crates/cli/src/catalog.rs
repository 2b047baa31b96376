//! Catalog loading.
//!
//! The built-in menu is compiled into the binary; `FOODCART_CATALOG` points
//! at a replacement YAML file with the same layout.

use std::path::Path;

use foodcart_core::{Catalog, CatalogId, CatalogItem, Customization};
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../catalog/tasty-bites.yaml");

/// Errors raised while loading or querying the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog item not found: {0}")]
    UnknownItem(CatalogId),

    #[error("{item} has no customization named `{name}`")]
    UnknownCustomization { item: String, name: String },
}

/// Load the catalog from `path`, or the built-in menu when `None`.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read or parsed.
pub fn load(path: Option<&Path>) -> Result<Catalog, CatalogError> {
    match path {
        Some(path) => {
            let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
                path: path.display().to_string(),
                source,
            })?;
            parse(&yaml)
        }
        None => parse(BUILTIN_CATALOG),
    }
}

/// Parse a YAML catalog.
///
/// # Errors
///
/// Returns `CatalogError::Parse` on malformed YAML or invalid prices.
pub fn parse(yaml: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_yaml::from_str(yaml)?;
    tracing::debug!(
        restaurant = %catalog.restaurant.name,
        items = catalog.items.len(),
        "Loaded catalog"
    );
    Ok(catalog)
}

/// Resolve an item and the customizations named on the command line.
///
/// # Errors
///
/// Returns `CatalogError` if the item or any customization is unknown.
pub fn resolve<'a>(
    catalog: &'a Catalog,
    id: &CatalogId,
    names: &[String],
) -> Result<(&'a CatalogItem, Vec<Customization>), CatalogError> {
    let item = catalog
        .find(id)
        .ok_or_else(|| CatalogError::UnknownItem(id.clone()))?;
    let customizations = names
        .iter()
        .map(|name| {
            item.customization(name)
                .cloned()
                .ok_or_else(|| CatalogError::UnknownCustomization {
                    item: item.name.clone(),
                    name: name.clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((item, customizations))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use foodcart_core::Price;

    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = load(None).unwrap();
        assert_eq!(catalog.restaurant.name, "Tasty Bites");
        assert_eq!(catalog.items.len(), 4);
        assert_eq!(
            catalog.categories(),
            vec!["Burgers", "Pizza", "Salads", "Pasta"]
        );

        let burger = catalog.find(&CatalogId::new("1")).unwrap();
        assert_eq!(burger.price, Price::from_cents(1299));
        assert_eq!(burger.customizations.len(), 3);
    }

    #[test]
    fn test_resolve_customizations_by_name() {
        let catalog = load(None).unwrap();
        let (item, customizations) = resolve(
            &catalog,
            &CatalogId::new("1"),
            &["bacon".to_string(), "Extra Cheese".to_string()],
        )
        .unwrap();
        assert_eq!(item.name, "Classic Burger");
        assert_eq!(customizations[0].name, "Bacon");
        assert_eq!(customizations[1].price, Price::from_cents(150));
    }

    #[test]
    fn test_resolve_unknown_item() {
        let catalog = load(None).unwrap();
        assert!(matches!(
            resolve(&catalog, &CatalogId::new("99"), &[]),
            Err(CatalogError::UnknownItem(_))
        ));
    }

    #[test]
    fn test_resolve_unknown_customization() {
        let catalog = load(None).unwrap();
        assert!(matches!(
            resolve(&catalog, &CatalogId::new("3"), &["Bacon".to_string()]),
            Err(CatalogError::UnknownCustomization { .. })
        ));
    }

    #[test]
    fn test_negative_price_rejected() {
        let yaml = "restaurant:\n  name: Bad\nitems:\n  - id: 1\n    name: Refund\n    price: \"-1.00\"\n";
        assert!(matches!(parse(yaml), Err(CatalogError::Parse(_))));
    }
}
