//! Promo codes.

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// Known promo codes and their flat discount in cents.
const PROMO_CODES: &[(&str, u32)] = &[("WELCOME", 500)];

/// An applied promo code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promo {
    /// Canonical (upper-case) code.
    pub code: String,
    /// Flat amount taken off the order total.
    pub discount: Price,
}

impl Promo {
    /// Look up a code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn lookup(code: &str) -> Option<Self> {
        let wanted = code.trim();
        PROMO_CODES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(wanted))
            .map(|&(known, cents)| Self {
                code: known.to_owned(),
                discount: Price::from_cents(cents),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let promo = Promo::lookup(" welcome ").unwrap();
        assert_eq!(promo.code, "WELCOME");
        assert_eq!(promo.discount, Price::from_cents(500));
    }

    #[test]
    fn test_unknown_code() {
        assert!(Promo::lookup("FREEFOOD").is_none());
    }
}
