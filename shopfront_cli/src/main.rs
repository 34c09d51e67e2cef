mod commands;
mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shopfront_lib::{Catalog, ClientConfig, FetchOrchestrator, ShopClient};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(about = "Browse shop catalogs page by page")]
struct Cli {
    /// Output format: table, json, csv, or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// API base URL (overrides SHOPFRONT_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List a shop's products, optionally by category
    Products(commands::products::ProductsArgs),
    /// List shops
    Shops,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shopfront=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let catalog = match &config.locale_file {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("loading locale file {}", path.display()))?,
        None => Catalog::english(),
    };
    tracing::debug!("using {} (locale {})", config.base_url, catalog.locale());

    let client = ShopClient::new(&config);

    match &cli.command {
        Commands::Products(args) => {
            let orchestrator = FetchOrchestrator::new(client, catalog);
            commands::products::run(args, &orchestrator, config.page_size, &format).await?
        }
        Commands::Shops => commands::shops::run(&client, &format).await?,
    }

    Ok(())
}
