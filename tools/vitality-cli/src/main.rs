//! Vitality CLI - Browse the Vitality Drinks catalog from the terminal.
//!
//! Commands:
//! - `vitality products` - Search, filter and sort the catalog
//! - `vitality show` - Show a product page
//! - `vitality collections` - List featured, bestsellers, new arrivals or bundles
//! - `vitality subscribe` - Sign up for the newsletter
//! - `vitality contact` - Send a message
//! - `vitality config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vitality_commerce::submission::SimulatedSubmissionService;

use commands::{CollectionsArgs, ConfigArgs, ContactArgs, ProductsArgs, ShowArgs, SubscribeArgs};

/// Vitality CLI - Browse the Vitality Drinks catalog
#[derive(Parser)]
#[command(name = "vitality")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort products
    Products(ProductsArgs),

    /// Show a product page
    Show(ShowArgs),

    /// List a curated collection
    Collections(CollectionsArgs),

    /// Subscribe to the newsletter
    Subscribe(SubscribeArgs),

    /// Send a message to the team
    Contact(ContactArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    logging::init(&ctx.config.logging, ctx.output.is_verbose());

    let service = SimulatedSubmissionService::new();

    // Execute command
    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Collections(args) => commands::collections::run(args, &ctx).await,
        Commands::Subscribe(args) => commands::subscribe::run(args, &ctx, &service).await,
        Commands::Contact(args) => commands::contact::run(args, &ctx, &service).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
