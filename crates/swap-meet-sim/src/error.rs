//! # Simulation Error Types
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Simulation Error Categories                          │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │   Trade script  │  │      Output             │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  ConfigNotFound │  │  UnknownVendor  │  │  ReportFailed           │ │
//! │  │  ConfigLoad     │  │  Core (locks,   │  │                         │ │
//! │  │  InvalidConfig  │  │   validation)   │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A trade that is merely refused (swap returns `false`) is NOT an error;
//! it shows up as `accepted: false` in the report.

use swap_meet_core::CoreError;
use thiserror::Error;

/// Result type alias for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// An explicitly requested config file does not exist.
    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    /// Failed to read or parse the config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config parsed but describes an impossible market.
    #[error("Invalid market configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Trade Errors
    // =========================================================================
    /// A trade names a vendor that is not at the market.
    #[error("Unknown vendor: {0}")]
    UnknownVendor(String),

    /// Error from the trading core.
    #[error(transparent)]
    Core(#[from] CoreError),

    // =========================================================================
    // Output Errors
    // =========================================================================
    /// Failed to render the report.
    #[error("Failed to render report: {0}")]
    ReportFailed(String),
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for SimError {
    fn from(err: toml::de::Error) -> Self {
        SimError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::ReportFailed(err.to_string())
    }
}
