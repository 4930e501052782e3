//! # swap-meet-sim: Scripted Swap Meet Runner
//!
//! Reads a market description (vendors, inventories, trades) from TOML,
//! plays the trades through `swap-meet-core` and produces a JSON report.
//!
//! ## Modules
//!
//! - [`config`] - `MarketConfig` loading and validation
//! - [`market`] - `Market` trade execution and `MarketReport`
//! - [`error`] - `SimError`
//! - [`logging`] - tracing subscriber setup for the binary

pub mod config;
pub mod error;
pub mod logging;
pub mod market;

pub use config::{ItemConfig, MarketConfig, TradeConfig, VendorConfig};
pub use error::{SimError, SimResult};
pub use market::{Market, MarketReport, TradeOutcome};
