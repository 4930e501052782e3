//! # swap-meet-core: Pure Trading Logic for Swap Meet
//!
//! Vendors hold inventories of categorized, condition-rated items and trade
//! them one-for-one with each other. This crate is all of that logic, with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Swap Meet Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                swap-meet-sim (binary)                           │   │
//! │  │    market.toml ──► Market ──► trades ──► JSON report           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ swap-meet-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   item    │  │  vendor   │  │  shared   │  │ validation│  │   │
//! │  │   │   Item    │  │  Vendor   │  │ Shared-   │  │   rules   │  │   │
//! │  │   │ Condition │  │  swaps    │  │  Vendor   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`item`] - `Item` and its `Condition` rating
//! - [`vendor`] - `Vendor` inventory and swap operations
//! - [`shared`] - `SharedVendor`, a lock-ordered handle for threaded hosts
//! - [`error`] - Domain error types
//! - [`validation`] - Checks for items coming from untrusted input
//!
//! ## Example Usage
//!
//! ```rust
//! use swap_meet_core::{Item, Vendor};
//!
//! let mut alice = Vendor::with_inventory(vec![Item::new("toys", 3)]);
//! let mut bob = Vendor::with_inventory(vec![Item::new("books", 5)]);
//!
//! assert!(alice.swap_first_item(&mut bob));
//! assert_eq!(alice.inventory(), &[Item::new("books", 5)]);
//! assert_eq!(bob.inventory(), &[Item::new("toys", 3)]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod item;
pub mod shared;
pub mod validation;
pub mod vendor;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{Condition, Item, CLOTHING, DECOR, ELECTRONICS};
pub use shared::{SharedVendor, VendorSnapshot};
pub use vendor::Vendor;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest rating on the condition scale accepted by `Item::try_new`.
pub const MAX_CONDITION: u32 = 5;

/// Longest category name accepted by `Item::try_new`, in characters.
pub const MAX_CATEGORY_LEN: usize = 50;
