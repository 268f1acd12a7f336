//! CLI command implementations.

pub mod cart;
pub mod config;
pub mod product;
pub mod products;

use clap::{Args, Subcommand};
use storefront_commerce::cart::CartOperation;
use storefront_commerce::search::SortOption;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Case-insensitive text matched against name or description.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category slug to include (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<String>,

    /// Brand to include (repeatable).
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Lowest price, inclusive.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price, inclusive.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Minimum average rating.
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Hide out-of-stock products.
    #[arg(long)]
    pub in_stock: bool,

    /// Listing order: featured, newest, price-asc, price-desc, rating, bestselling.
    #[arg(long, default_value = "featured")]
    pub sort: SortOption,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Operations applied in order: add:ID[:QTY], remove:ID, set:ID:QTY, clear.
    #[arg(required = true)]
    pub operations: Vec<CartOperation>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
