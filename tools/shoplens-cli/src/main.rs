//! ShopLens CLI - search synthetic product listings across shopping platforms.
//!
//! Commands:
//! - `shoplens search` - Search for a product
//! - `shoplens markets` - List supported markets
//! - `shoplens brands` - List catalog brands
//! - `shoplens trending` - Show trending and quick searches
//! - `shoplens history` - Manage search history
//! - `shoplens config` - Manage configuration

mod commands;
mod config;
mod context;
mod history_store;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BrandsArgs, ConfigArgs, HistoryArgs, SearchArgs};
use config::{LogFormat, LoggingConfig};

/// ShopLens - compare product listings across shopping platforms
#[derive(Parser)]
#[command(name = "shoplens")]
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
    /// Search for a product
    Search(SearchArgs),

    /// List supported markets
    Markets,

    /// List brands in the catalog
    Brands(BrandsArgs),

    /// Show trending and quick searches
    Trending,

    /// Manage search history
    History(HistoryArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_logging(config: &LoggingConfig, verbose: bool) {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config before logging so the [logging] section applies
    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    init_logging(&ctx.config.logging, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Markets => commands::markets::run(&ctx).await,
        Commands::Brands(args) => commands::brands::run(args, &ctx).await,
        Commands::Trending => commands::trending::run(&ctx).await,
        Commands::History(args) => commands::history::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
