//! # Market
//!
//! Plays a scripted list of trades between configured vendors.
//!
//! ## Run Flow
//! ```text
//! MarketConfig ──► Market::from_config ──► SharedVendor per vendor
//!                                               │
//!       trades ──► Market::run ──► one core swap per trade, in order
//!                                               │
//!                                               ▼
//!                       MarketReport { trades, vendors, generated_at }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use swap_meet_core::{SharedVendor, Vendor, VendorSnapshot};
use tracing::{info, warn};
use ts_rs::TS;

use crate::config::{MarketConfig, TradeConfig};
use crate::error::{SimError, SimResult};

/// What happened to one scripted trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TradeOutcome {
    /// Position in the script, starting at 0.
    pub index: usize,
    pub kind: String,
    pub vendor: String,
    pub peer: String,
    pub accepted: bool,
}

/// Result of a full run.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MarketReport {
    #[ts(as = "String")]
    pub generated_at: DateTime<Utc>,
    pub trades: Vec<TradeOutcome>,
    /// Final inventories, in config order.
    pub vendors: Vec<VendorSnapshot>,
}

impl MarketReport {
    /// Number of trades that went through.
    pub fn accepted_count(&self) -> usize {
        self.trades.iter().filter(|trade| trade.accepted).count()
    }

    pub fn to_json_pretty(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The vendors at a swap meet.
#[derive(Debug, Clone, Default)]
pub struct Market {
    vendors: Vec<SharedVendor>,
}

impl Market {
    /// Opens a market with every configured vendor and its inventory.
    ///
    /// The config is validated first, so vendor names are unique and every
    /// trade can be resolved by name.
    pub fn from_config(config: &MarketConfig) -> SimResult<Self> {
        config.validate()?;

        let vendors = config
            .vendors
            .iter()
            .map(|vendor| {
                let items = vendor
                    .items
                    .iter()
                    .map(|item| item.to_item())
                    .collect::<SimResult<Vec<_>>>()?;
                Ok(SharedVendor::new(&vendor.name, Vendor::with_inventory(items)))
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Market { vendors })
    }

    /// Looks a vendor up by name.
    pub fn vendor(&self, name: &str) -> SimResult<&SharedVendor> {
        self.vendors
            .iter()
            .find(|vendor| vendor.name() == name)
            .ok_or_else(|| SimError::UnknownVendor(name.to_string()))
    }

    /// Applies one trade and reports whether it went through.
    pub fn apply(&self, trade: &TradeConfig) -> SimResult<bool> {
        let (vendor_name, peer_name) = trade.parties();
        let vendor = self.vendor(vendor_name)?;
        let peer = self.vendor(peer_name)?;

        let accepted = match trade {
            TradeConfig::Items {
                my_item,
                their_item,
                ..
            } => {
                let my_item = my_item.to_item()?;
                let their_item = their_item.to_item()?;
                let accepted = vendor.swap_items(peer, &my_item, &their_item)?;
                if !accepted {
                    warn!(
                        vendor = vendor_name,
                        peer = peer_name,
                        offered = %my_item,
                        requested = %their_item,
                        "Trade refused: an item is not held by its owner"
                    );
                }
                accepted
            }
            TradeConfig::First { .. } => vendor.swap_first_item(peer)?,
            TradeConfig::BestByCategory {
                my_priority,
                their_priority,
                ..
            } => vendor.swap_best_by_category(peer, my_priority, their_priority)?,
        };

        Ok(accepted)
    }

    /// Applies `trades` in order and snapshots the result.
    pub fn run(&self, trades: &[TradeConfig]) -> SimResult<MarketReport> {
        let mut outcomes = Vec::with_capacity(trades.len());

        for (index, trade) in trades.iter().enumerate() {
            let accepted = self.apply(trade)?;
            let (vendor, peer) = trade.parties();
            info!(index, kind = trade.kind(), vendor, peer, accepted, "Trade processed");

            outcomes.push(TradeOutcome {
                index,
                kind: trade.kind().to_string(),
                vendor: vendor.to_string(),
                peer: peer.to_string(),
                accepted,
            });
        }

        let vendors = self
            .vendors
            .iter()
            .map(SharedVendor::snapshot)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MarketReport {
            generated_at: Utc::now(),
            trades: outcomes,
            vendors,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
