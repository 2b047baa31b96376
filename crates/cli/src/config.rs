//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FOODCART_DATA_DIR` - Directory holding the cart, orders, favorites, and addresses (default: .foodcart)
//! - `FOODCART_CATALOG` - Path to a YAML catalog (default: built-in Tasty Bites menu)
//! - `FOODCART_TAX_RATE` - Tax as a fraction of the subtotal (default: 0.10)
//! - `FOODCART_DELIVERY_FEE` - Flat delivery fee (default: 3.99)
//! - `FOODCART_FREE_DELIVERY_THRESHOLD` - Subtotal above which delivery is free,
//!   or `none` to always charge (default: 50.00)
//! - `FOODCART_CURRENCY` - ISO 4217 code used for display (default: USD)
//! - `FOODCART_LOG_FORMAT` - `pretty` or `json` (default: pretty)

use std::path::PathBuf;

use foodcart_core::{CurrencyCode, Price, PricingConfig};
use rust_decimal::Decimal;
use thiserror::Error;

const CART_FILE: &str = "cart.json";
const ORDERS_FILE: &str = "orders.json";
const FAVORITES_FILE: &str = "favorites.json";
const ADDRESSES_FILE: &str = "addresses.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory for persisted state
    pub data_dir: PathBuf,
    /// Catalog override; the built-in menu is used when unset
    pub catalog_path: Option<PathBuf>,
    /// Tax, delivery fee, and currency applied to the cart
    pub pricing: PricingConfig,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(
            lookup("FOODCART_DATA_DIR").unwrap_or_else(|| ".foodcart".to_string()),
        );
        let catalog_path = lookup("FOODCART_CATALOG").map(PathBuf::from);

        let tax_rate = parse_tax_rate(
            "FOODCART_TAX_RATE",
            &lookup("FOODCART_TAX_RATE").unwrap_or_else(|| "0.10".to_string()),
        )?;
        let delivery_fee = parse_price(
            "FOODCART_DELIVERY_FEE",
            &lookup("FOODCART_DELIVERY_FEE").unwrap_or_else(|| "3.99".to_string()),
        )?;
        let threshold_raw = lookup("FOODCART_FREE_DELIVERY_THRESHOLD")
            .unwrap_or_else(|| "50.00".to_string());
        let free_delivery_threshold = if threshold_raw.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(parse_price("FOODCART_FREE_DELIVERY_THRESHOLD", &threshold_raw)?)
        };
        let currency = lookup("FOODCART_CURRENCY")
            .unwrap_or_else(|| "USD".to_string())
            .parse::<CurrencyCode>()
            .map_err(|e| ConfigError::InvalidEnvVar("FOODCART_CURRENCY".to_string(), e))?;

        let log_format = match lookup("FOODCART_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidEnvVar(
                    "FOODCART_LOG_FORMAT".to_string(),
                    format!("expected `pretty` or `json`, got `{other}`"),
                ));
            }
        };

        Ok(Self {
            data_dir,
            catalog_path,
            pricing: PricingConfig {
                tax_rate,
                delivery_fee,
                free_delivery_threshold,
                currency,
            },
            log_format,
        })
    }

    /// Path of the persisted cart.
    #[must_use]
    pub fn cart_path(&self) -> PathBuf {
        self.data_dir.join(CART_FILE)
    }

    /// Path of the persisted order history.
    #[must_use]
    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(ORDERS_FILE)
    }

    /// Path of the persisted favorites.
    #[must_use]
    pub fn favorites_path(&self) -> PathBuf {
        self.data_dir.join(FAVORITES_FILE)
    }

    /// Path of the saved addresses.
    #[must_use]
    pub fn addresses_path(&self) -> PathBuf {
        self.data_dir.join(ADDRESSES_FILE)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a non-negative price from a variable.
fn parse_price(key: &str, value: &str) -> Result<Price, ConfigError> {
    value
        .parse::<Price>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Parse a tax rate between 0 and 1 inclusive.
fn parse_tax_rate(key: &str, value: &str) -> Result<Decimal, ConfigError> {
    let rate = value
        .trim()
        .parse::<Decimal>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0 and 1 (got {rate})"),
        ));
    }
    Ok(rate)
}
