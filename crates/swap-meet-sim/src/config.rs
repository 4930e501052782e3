//! # Market Configuration
//!
//! Describes who is at the swap meet and which trades they attempt.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. --config PATH on the command line (highest priority)               │
//! │                                                                         │
//! │  2. SWAP_MEET_CONFIG environment variable                              │
//! │                                                                         │
//! │  3. ./market.toml                                                      │
//! │                                                                         │
//! │  4. Default values (lowest priority): an empty market                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [[vendors]]
//! name = "alice"
//! items = [
//!     { category = "tools", condition = 2 },
//!     { category = "tools", condition = 5 },
//! ]
//!
//! [[vendors]]
//! name = "bob"
//! items = [{ category = "books", condition = 4 }]
//!
//! [[trades]]
//! kind = "items"          # items | first | best_by_category
//! vendor = "alice"
//! peer = "bob"
//! my_item = { category = "tools", condition = 2 }
//! their_item = { category = "books", condition = 4 }
//! ```

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use swap_meet_core::validation::validate_category;
use swap_meet_core::{CoreError, Item};
use tracing::{debug, info};

use crate::error::{SimError, SimResult};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "SWAP_MEET_CONFIG";

/// Config file looked up in the working directory when nothing else is set.
pub const DEFAULT_CONFIG_FILE: &str = "market.toml";

// =============================================================================
// Items and Vendors
// =============================================================================

/// An item as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemConfig {
    pub category: String,
    pub condition: u32,
}

impl ItemConfig {
    /// Builds the core item.
    ///
    /// The category is trimmed and checked; the condition is taken as is,
    /// since scripted markets may rate items on any scale.
    pub fn to_item(&self) -> SimResult<Item> {
        let category = validate_category(&self.category).map_err(CoreError::from)?;
        Ok(Item::new(category, self.condition))
    }
}

/// A vendor and its opening inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorConfig {
    pub name: String,

    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

// =============================================================================
// Trades
// =============================================================================

/// One scripted trade, tagged by `kind`.
///
/// `vendor` is the side that initiates (`self` in the core operations),
/// `peer` the counterparty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TradeConfig {
    /// Direct swap of two named items.
    Items {
        vendor: String,
        peer: String,
        my_item: ItemConfig,
        their_item: ItemConfig,
    },

    /// Swap of the first item in each inventory.
    First { vendor: String, peer: String },

    /// Swap of each side's best item in the category the other wants.
    BestByCategory {
        vendor: String,
        peer: String,
        my_priority: String,
        their_priority: String,
    },
}

impl TradeConfig {
    /// The `kind` tag, as written in the config file.
    pub fn kind(&self) -> &'static str {
        match self {
            TradeConfig::Items { .. } => "items",
            TradeConfig::First { .. } => "first",
            TradeConfig::BestByCategory { .. } => "best_by_category",
        }
    }

    /// `(vendor, peer)` names.
    pub fn parties(&self) -> (&str, &str) {
        match self {
            TradeConfig::Items { vendor, peer, .. }
            | TradeConfig::First { vendor, peer }
            | TradeConfig::BestByCategory { vendor, peer, .. } => (vendor.as_str(), peer.as_str()),
        }
    }
}

// =============================================================================
// Market Configuration
// =============================================================================

/// Complete swap meet script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    #[serde(default)]
    pub vendors: Vec<VendorConfig>,

    #[serde(default)]
    pub trades: Vec<TradeConfig>,
}

impl MarketConfig {
    /// Loads configuration from file and validates it.
    ///
    /// ## Load Order
    /// 1. `config_path` if given; it must exist
    /// 2. Otherwise `SWAP_MEET_CONFIG`, then `./market.toml`; a missing
    ///    file here means an empty market
    pub fn load(config_path: Option<PathBuf>) -> SimResult<Self> {
        let config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(SimError::ConfigNotFound(path.display().to_string()));
                }
                Self::read(path)?
            }
            None => {
                let path = Self::default_config_path();
                if path.exists() {
                    Self::read(path)?
                } else {
                    debug!(?path, "Config file not found, using an empty market");
                    Self::default()
                }
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(contents: &str) -> SimResult<Self> {
        let config: MarketConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// `SWAP_MEET_CONFIG` if set, else `./market.toml`.
    pub fn default_config_path() -> PathBuf {
        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Validates the configuration.
    ///
    /// ## Rules
    /// - Vendor names are non-empty and unique
    /// - Every item has a valid category
    /// - Every trade names two different, known vendors
    /// - Every item inside a trade has a valid category
    ///
    /// Item errors name the vendor or trade index that holds the item.
    pub fn validate(&self) -> SimResult<()> {
        let mut names = HashSet::new();
        for vendor in &self.vendors {
            if vendor.name.trim().is_empty() {
                return Err(SimError::InvalidConfig("vendor name must not be empty".into()));
            }
            if !names.insert(vendor.name.as_str()) {
                return Err(SimError::InvalidConfig(format!(
                    "duplicate vendor name: '{}'",
                    vendor.name
                )));
            }
            for item in &vendor.items {
                item.to_item().map_err(|e| {
                    SimError::InvalidConfig(format!("vendor '{}': {}", vendor.name, e))
                })?;
            }
        }

        for (index, trade) in self.trades.iter().enumerate() {
            let (vendor, peer) = trade.parties();
            for name in [vendor, peer] {
                if !names.contains(name) {
                    return Err(SimError::UnknownVendor(name.to_string()));
                }
            }
            if vendor == peer {
                return Err(SimError::InvalidConfig(format!(
                    "trade #{} has '{}' trading with itself",
                    index, vendor
                )));
            }
            if let TradeConfig::Items {
                my_item,
                their_item,
                ..
            } = trade
            {
                for item in [my_item, their_item] {
                    item.to_item().map_err(|e| {
                        SimError::InvalidConfig(format!("trade #{}: {}", index, e))
                    })?;
                }
            }
        }

        Ok(())
    }

    fn read(path: PathBuf) -> SimResult<Self> {
        info!(?path, "Loading market config from file");
        let contents = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
