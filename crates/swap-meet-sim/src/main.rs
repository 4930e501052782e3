//! # Swap Meet Simulator
//!
//! Plays a scripted swap meet and prints the outcome as JSON.
//!
//! ## Usage
//! ```bash
//! # Use SWAP_MEET_CONFIG, or ./market.toml
//! cargo run -p swap-meet-sim
//!
//! # Specify the market file
//! cargo run -p swap-meet-sim -- --config demos/market.toml
//!
//! # More detail on every swap decision
//! RUST_LOG=swap_meet_core=trace cargo run -p swap-meet-sim -- -c demos/market.toml
//! ```

use std::env;
use std::path::PathBuf;

use swap_meet_sim::logging::init_tracing;
use swap_meet_sim::{Market, MarketConfig};
use tracing::info;

const USAGE: &str = "Usage: swap-meet-sim [--config PATH]";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    return Err(format!("--config needs a path\n{USAGE}").into());
                }
            }
            "--help" | "-h" => {
                println!("{USAGE}");
                return Ok(());
            }
            other => {
                return Err(format!("Unknown argument: {other}\n{USAGE}").into());
            }
        }
        i += 1;
    }

    let config = MarketConfig::load(config_path)?;
    info!(
        vendors = config.vendors.len(),
        trades = config.trades.len(),
        "Market opened"
    );

    let market = Market::from_config(&config)?;
    let report = market.run(&config.trades)?;

    info!(
        accepted = report.accepted_count(),
        refused = report.trades.len() - report.accepted_count(),
        "Market closed"
    );

    println!("{}", report.to_json_pretty()?);
    Ok(())
}
