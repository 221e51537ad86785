//! Folio CLI - Command line access to portfolio analytics.
//!
//! Every command prints a JSON `ApiResponse` on stdout; logs go to stderr.

use clap::{Parser, Subcommand};
use folio_core::{
    calculate_with, ApiResponse, Error, FolioConfig, JsonFileStore, PortfolioSnapshot,
    PortfolioStore,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio portfolio analytics CLI")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.folio/config.toml or $FOLIO_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Portfolio data file (overrides the config file)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Portfolio summary totals and performers
    Summary,
    /// Holdings with value and gain/loss
    Holdings,
    /// Allocation by sector and market cap
    Allocation,
    /// Performance timeline and trailing returns
    Performance,
    /// Most recent trades
    Activity {
        /// Number of trades to show (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Replace the data file with the bundled sample dataset
    Seed,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(data) => println!("{}", render(&ApiResponse::ok(data))),
        Err(e) => {
            tracing::error!("{}", e);
            println!("{}", render(&ApiResponse::<()>::err(e.to_string())));
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> folio_core::Result<Value> {
    let config_path = cli.config.unwrap_or_else(FolioConfig::default_path);
    let config = FolioConfig::load_or_default(&config_path)?;

    let data_file = cli
        .data_file
        .or_else(|| config.data_file.clone())
        .unwrap_or_else(JsonFileStore::default_path);
    let store = JsonFileStore::new(data_file);

    match cli.command {
        Commands::Summary => {
            let metrics = calculate_with(&store.holdings()?, &config.metrics)?;
            to_value(&metrics.summary)
        }
        Commands::Holdings => {
            let metrics = calculate_with(&store.holdings()?, &config.metrics)?;
            to_value(&metrics.holdings)
        }
        Commands::Allocation => {
            let metrics = calculate_with(&store.holdings()?, &config.metrics)?;
            to_value(&metrics.allocation)
        }
        Commands::Performance => {
            let history = store
                .performance()?
                .ok_or_else(|| Error::NotFound("performance history".to_string()))?;
            to_value(&history.resolved())
        }
        Commands::Activity { limit } => {
            let activity = store.recent_activity(limit.unwrap_or(config.activity_limit))?;
            to_value(&activity)
        }
        Commands::Seed => {
            let snapshot = PortfolioSnapshot::sample();
            store.seed(&snapshot)?;
            Ok(json!({
                "message": "Seeded sample portfolio",
                "path": store.path(),
                "holdings": snapshot.holdings.len(),
                "activity": snapshot.activity.len(),
            }))
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> folio_core::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn render<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string_pretty(response)
        .unwrap_or_else(|e| format!(r#"{{"ok":false,"error":"{}"}}"#, e))
}
