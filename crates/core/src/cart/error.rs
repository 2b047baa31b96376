//! Cart error types.

use thiserror::Error;

use crate::types::{PriceError, QuantityError};

/// Errors returned synchronously by cart operations.
///
/// A failed operation leaves the cart unchanged. Persistence failures are
/// never reported here; the engine logs them and keeps the in-memory state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// Malformed input such as a non-positive quantity or a missing catalog ID.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The promo code is not in the promo table.
    #[error("Unknown promo code: {0}")]
    UnknownPromoCode(String),
}

impl From<QuantityError> for CartError {
    fn from(err: QuantityError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}

impl From<PriceError> for CartError {
    fn from(err: PriceError) -> Self {
        Self::InvalidArgument(err.to_string())
    }
}
