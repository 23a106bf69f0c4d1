//! CLI command implementations.

pub mod collections;
pub mod config;
pub mod contact;
pub mod products;
pub mod show;
pub mod subscribe;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Text to match against names and descriptions.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Category name, or "All".
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum price.
    #[arg(long)]
    pub min: Option<f64>,

    /// Maximum price.
    #[arg(long)]
    pub max: Option<f64>,

    /// Sort key: featured, price-low, price-high or name.
    #[arg(long)]
    pub sort: Option<String>,

    /// Also show per-category counts.
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the collections command.
#[derive(Args)]
pub struct CollectionsArgs {
    /// Collection to list.
    #[arg(value_enum)]
    pub collection: Collection,

    /// Maximum number of products (defaults from config).
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    /// The first products in catalog order.
    Featured,
    /// Best-selling products.
    Bestsellers,
    /// Products badged "New".
    New,
    /// Multi-bottle bundles.
    Bundles,
}

/// Arguments for the subscribe command.
#[derive(Args)]
pub struct SubscribeArgs {
    /// Email address.
    pub email: String,
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Your name.
    #[arg(long)]
    pub name: Option<String>,

    /// Your email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Subject: general, order, wholesale or other.
    #[arg(long)]
    pub subject: Option<String>,

    /// Message body.
    #[arg(short, long)]
    pub message: Option<String>,
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
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
