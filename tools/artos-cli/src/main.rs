//! Artos CLI - developer tool for testing product listings.
//!
//! Commands:
//! - `artos products` - print one page of the store catalog
//! - `artos variant <id>` - print the detail view for a single variant

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use artos_data::{StoreClient, StoreConfig};

/// Browse an Artos store catalog from the terminal
#[derive(Parser)]
#[command(name = "artos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Store API base URL
    #[arg(long, env = "ARTOS_API_URL", default_value = "https://api.artosapp.com")]
    api_url: String,

    /// Store identifier
    #[arg(long, env = "ARTOS_STORE_ID")]
    store_id: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the product catalog
    Products(commands::ProductsArgs),

    /// Print the detail view for a single variant
    Variant(commands::VariantArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let client = StoreClient::new(StoreConfig::new(&cli.api_url, &cli.store_id));

    match cli.command {
        Commands::Products(args) => commands::products(client, args).await,
        Commands::Variant(args) => commands::variant(client, args).await,
    }
}
