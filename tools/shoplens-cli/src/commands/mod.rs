//! CLI command implementations.

pub mod brands;
pub mod config;
pub mod history;
pub mod markets;
pub mod search;
pub mod trending;

use clap::{Args, Subcommand};
use shoplens_commerce::search::SortOption;

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// What to search for.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Country code (e.g., IN, GB). Detected when omitted.
    #[arg(long)]
    pub country: Option<String>,

    /// Minimum price in market currency.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price in market currency.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Only these platforms (repeatable).
    #[arg(long = "platform")]
    pub platforms: Vec<String>,

    /// Only these brands (repeatable).
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Minimum rating (0-5).
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Only listings with free shipping.
    #[arg(long)]
    pub free_shipping: bool,

    /// Sort order: relevance, price-low, price-high, rating, popularity, delivery.
    #[arg(short, long, value_parser = parse_sort)]
    pub sort: Option<SortOption>,

    /// Seed the generator for reproducible listings.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of listings to print.
    #[arg(long, default_value = "10")]
    pub show: usize,

    /// Don't record this search in history.
    #[arg(long)]
    pub no_history: bool,
}

fn parse_sort(s: &str) -> Result<SortOption, String> {
    s.parse::<SortOption>().map_err(|e| e.to_string())
}

/// Arguments for the brands command.
#[derive(Args)]
pub struct BrandsArgs {
    /// Country code; only brands popular there are listed.
    #[arg(long)]
    pub country: Option<String>,
}

/// Arguments for the history command.
#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: Option<HistoryCommand>,
}

#[derive(Subcommand)]
pub enum HistoryCommand {
    /// List recent searches.
    List {
        /// Show only the last N searches.
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Delete one search.
    Delete {
        /// Search record ID.
        id: String,
    },
    /// Delete all searches.
    Clear {
        /// Skip confirmation.
        #[arg(short, long)]
        yes: bool,
    },
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
        /// Output path (default: shoplens.toml). A .json path writes JSON.
        #[arg(short, long)]
        path: Option<String>,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
