//! Promo code commands.

use tracing::info;

use super::{CommandResult, open_cart};
use crate::config::CliConfig;

/// Apply a promo code to the cart.
pub fn apply(config: &CliConfig, code: &str) -> CommandResult {
    let mut cart = open_cart(config);
    let promo = cart.apply_promo(code)?;
    info!(
        code = %promo.code,
        "Promo applied: {} off",
        cart.config().currency.format(promo.discount.amount())
    );
    Ok(())
}

/// Remove the applied promo code.
pub fn remove(config: &CliConfig) -> CommandResult {
    let mut cart = open_cart(config);
    cart.remove_promo();
    info!("Promo removed");
    Ok(())
}
