//! Line item quantity.

use core::fmt;
use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// The value is zero or negative.
    #[error("quantity must be at least 1 (got {0})")]
    NotPositive(i64),
    /// The value does not fit in a `u32`.
    #[error("quantity {0} is too large")]
    TooLarge(i64),
    /// Adding to the quantity overflowed.
    #[error("quantity overflow")]
    Overflow,
}

/// A positive item count.
///
/// A stored line item can never hold a quantity of zero, so the type
/// cannot represent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A quantity of one.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Create a quantity from an unsigned count.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::NotPositive`] if `count` is zero.
    pub fn new(count: u32) -> Result<Self, QuantityError> {
        NonZeroU32::new(count)
            .map(Self)
            .ok_or(QuantityError::NotPositive(0))
    }

    /// The count as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Add another quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::Overflow`] if the sum exceeds `u32::MAX`.
    pub fn checked_add(self, other: Self) -> Result<Self, QuantityError> {
        self.0
            .checked_add(other.get())
            .map(Self)
            .ok_or(QuantityError::Overflow)
    }

    /// One less, or `None` when the result would be zero.
    #[must_use]
    pub fn decremented(self) -> Option<Self> {
        NonZeroU32::new(self.get() - 1).map(Self)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = QuantityError;

    fn try_from(count: i64) -> Result<Self, Self::Error> {
        if count < 1 {
            return Err(QuantityError::NotPositive(count));
        }
        let count = u32::try_from(count).map_err(|_| QuantityError::TooLarge(count))?;
        Self::new(count)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_and_negative() {
        assert!(matches!(Quantity::new(0), Err(QuantityError::NotPositive(0))));
        assert!(matches!(
            Quantity::try_from(-3_i64),
            Err(QuantityError::NotPositive(-3))
        ));
    }

    #[test]
    fn test_rejects_too_large() {
        assert!(matches!(
            Quantity::try_from(i64::from(u32::MAX) + 1),
            Err(QuantityError::TooLarge(_))
        ));
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Quantity::new(u32::MAX).unwrap();
        assert!(matches!(
            max.checked_add(Quantity::ONE),
            Err(QuantityError::Overflow)
        ));
    }

    #[test]
    fn test_decremented() {
        assert_eq!(Quantity::new(3).unwrap().decremented().unwrap().get(), 2);
        assert!(Quantity::ONE.decremented().is_none());
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<Quantity>("0").is_err());
        assert_eq!(serde_json::from_str::<Quantity>("2").unwrap().get(), 2);
    }
}
