//! Foodcart CLI - Browse the menu and manage a persistent cart.
//!
//! # Usage
//!
//! ```bash
//! # Show the menu
//! foodcart menu
//!
//! # Add two burgers with extra cheese, then review the cart
//! foodcart cart add 1 -q 2 -c "Extra Cheese"
//! foodcart cart show
//!
//! # Apply a promo code and check out
//! foodcart promo apply welcome
//! foodcart checkout
//!
//! # Review past orders
//! foodcart orders list
//! ```
//!
//! # Commands
//!
//! - `menu` - List the catalog
//! - `cart` - Show and edit the cart
//! - `promo` - Apply or remove a promo code
//! - `checkout` - Place an order from the cart
//! - `orders` - List orders and update their status
//! - `favorites` - Toggle and list favorite items
//! - `addresses` - Manage saved delivery addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use foodcart_core::NewAddress;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod commands;
mod config;
mod file_store;

use config::{CliConfig, LogFormat};

#[derive(Parser)]
#[command(name = "foodcart")]
#[command(author, version, about = "Foodcart storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the restaurant's menu
    Menu,
    /// Show and edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the promo code
    Promo {
        #[command(subcommand)]
        action: PromoAction,
    },
    /// Place an order from the current cart
    Checkout,
    /// Review past orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
    /// Manage favorite items
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },
    /// Manage saved delivery addresses
    Addresses {
        #[command(subcommand)]
        action: AddressesAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show line items and totals
    Show,
    /// Add a menu item
    Add {
        /// Catalog item ID
        item: String,

        /// Number of units to add
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        quantity: i64,

        /// Customization to include (repeatable)
        #[arg(short = 'c', long = "with")]
        customizations: Vec<String>,
    },
    /// Remove a line entirely
    Remove {
        /// Line ID as shown by `cart show`
        line: String,
    },
    /// Take one unit off a line
    Decrement {
        /// Line ID as shown by `cart show`
        line: String,
    },
    /// Set a line's quantity (0 removes it)
    Set {
        /// Line ID as shown by `cart show`
        line: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum PromoAction {
    /// Apply a promo code
    Apply {
        /// Promo code (case-insensitive)
        code: String,
    },
    /// Remove the applied promo code
    Remove,
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List past orders, newest first
    List,
    /// Update an order's status
    Status {
        /// Order ID
        order: String,

        /// New status (`processing`, `delivered`, `cancelled`)
        status: String,
    },
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Toggle an item's favorite flag
    Toggle {
        /// Catalog item ID
        item: String,
    },
    /// List favorite items
    List,
}

#[derive(Subcommand)]
enum AddressesAction {
    /// List saved addresses
    List,
    /// Save a new address
    Add {
        /// Label such as "Home" or "Work"
        #[arg(long)]
        name: String,

        #[arg(long)]
        street: String,

        #[arg(long, default_value = "")]
        city: String,

        #[arg(long, default_value = "")]
        state: String,

        /// ZIP or postal code
        #[arg(long = "zip", default_value = "")]
        zip_code: String,
    },
    /// Delete a saved address
    Remove {
        /// Address ID as shown by `addresses list`
        id: String,
    },
}

#[allow(clippy::print_stderr)]
fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Tracing is not configured yet
            eprintln!("Configuration error: {e}");
            std::process::exit(2);
        }
    };

    init_tracing(config.log_format);

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing with `RUST_LOG`, defaulting to info for our crates.
fn init_tracing(format: LogFormat) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "foodcart_cli=info,foodcart_core=warn".into());

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(false))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

fn run(cli: Cli, config: &CliConfig) -> commands::CommandResult {
    match cli.command {
        Commands::Menu => commands::menu::show(config)?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(config)?,
            CartAction::Add {
                item,
                quantity,
                customizations,
            } => commands::cart::add(config, &item, quantity, &customizations)?,
            CartAction::Remove { line } => commands::cart::remove(config, &line)?,
            CartAction::Decrement { line } => commands::cart::decrement(config, &line)?,
            CartAction::Set { line, quantity } => commands::cart::set(config, &line, quantity)?,
            CartAction::Clear => commands::cart::clear(config)?,
        },
        Commands::Promo { action } => match action {
            PromoAction::Apply { code } => commands::promo::apply(config, &code)?,
            PromoAction::Remove => commands::promo::remove(config)?,
        },
        Commands::Checkout => commands::orders::checkout(config)?,
        Commands::Orders { action } => match action {
            OrdersAction::List => commands::orders::list(config)?,
            OrdersAction::Status { order, status } => {
                commands::orders::set_status(config, &order, &status)?;
            }
        },
        Commands::Favorites { action } => match action {
            FavoritesAction::Toggle { item } => commands::favorites::toggle(config, &item)?,
            FavoritesAction::List => commands::favorites::list(config)?,
        },
        Commands::Addresses { action } => match action {
            AddressesAction::List => commands::addresses::list(config)?,
            AddressesAction::Add {
                name,
                street,
                city,
                state,
                zip_code,
            } => commands::addresses::add(
                config,
                NewAddress {
                    name,
                    street,
                    city,
                    state,
                    zip_code,
                },
            )?,
            AddressesAction::Remove { id } => commands::addresses::remove(config, &id)?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_add_with_customizations() {
        let cli = Cli::try_parse_from([
            "foodcart", "cart", "add", "1", "-q", "2", "-c", "Bacon", "--with", "Extra Cheese",
        ]);
        match cli {
            Ok(Cli {
                command:
                    Commands::Cart {
                        action:
                            CartAction::Add {
                                item,
                                quantity,
                                customizations,
                            },
                    },
            }) => {
                assert_eq!(item, "1");
                assert_eq!(quantity, 2);
                assert_eq!(customizations, vec!["Bacon", "Extra Cheese"]);
            }
            Ok(_) => panic!("parsed into the wrong subcommand"),
            Err(e) => panic!("failed to parse: {e}"),
        }
    }

    #[test]
    fn test_set_accepts_negative_quantity() {
        let parsed = Cli::try_parse_from(["foodcart", "cart", "set", "1", "-1"]);
        assert!(parsed.is_ok());
    }
}
