//! # Fulfillment Simulator
//!
//! Replays an orders file against a freshly started facility and prints the
//! resulting action log.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --orders orders.json --rate-ms 250 --output actions.json
//! ```

use clap::Parser;
use fulfillment::clients::EngineError;
use fulfillment::config::load_config;
use fulfillment::lifecycle::{run_harness, setup_tracing, FulfillmentSystem, HarnessOptions};
use fulfillment::model::{Order, OrderRecord};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{info, Instrument};

#[derive(Parser, Debug)]
#[command(name = "fulfillment")]
#[command(about = "Simulates order placement and courier pickups against the storage engine")]
struct Args {
    /// JSON file holding an array of orders
    #[arg(long)]
    orders: PathBuf,

    /// Storage configuration; created with defaults if missing
    #[arg(long, default_value = "config/init.json")]
    config: PathBuf,

    /// Milliseconds between placements
    #[arg(long, default_value_t = 500)]
    rate_ms: u64,

    /// Minimum courier delay in milliseconds
    #[arg(long, default_value_t = 4000)]
    min_ms: u64,

    /// Maximum courier delay in milliseconds (exclusive)
    #[arg(long, default_value_t = 8000)]
    max_ms: u64,

    /// Also write the action log to this file as JSON
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum HarnessError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> HarnessError + '_ {
    move |source| HarnessError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn read_orders(path: &Path) -> Result<Vec<Order>, HarnessError> {
    let data = std::fs::read_to_string(path).map_err(io_error(path))?;
    let records: Vec<OrderRecord> = serde_json::from_str(&data)?;
    Ok(records.into_iter().map(Order::from).collect())
}

#[tokio::main]
async fn main() -> Result<(), HarnessError> {
    setup_tracing();
    let args = Args::parse();

    let orders = read_orders(&args.orders)?;
    let config = load_config(&args.config);
    let options = HarnessOptions {
        rate: Duration::from_millis(args.rate_ms),
        min_pickup: Duration::from_millis(args.min_ms),
        max_pickup: Duration::from_millis(args.max_ms),
    };
    info!(orders = orders.len(), ?config, "Starting simulation");

    let system = FulfillmentSystem::start(&config);
    run_harness(&system.client, orders, options)
        .instrument(tracing::info_span!("simulation"))
        .await?;
    let actions = system.shutdown().await?;

    for action in &actions {
        println!("{action}");
    }

    if let Some(path) = &args.output {
        let data = serde_json::to_string_pretty(&actions)?;
        std::fs::write(path, data).map_err(io_error(path))?;
        info!(path = %path.display(), actions = actions.len(), "Wrote action log");
    }
    Ok(())
}
