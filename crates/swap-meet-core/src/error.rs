//! # Error Types
//!
//! Domain-specific error types for swap-meet-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  swap-meet-core errors (this file)                                     │
//! │  ├── CoreError        - Shared vendor / locking failures               │
//! │  └── ValidationError  - Checked item construction failures             │
//! │                                                                         │
//! │  swap-meet-sim errors (separate crate)                                 │
//! │  └── SimError         - Config loading and trade script failures       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SimError → exit code              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT An Error
//! The trading operations themselves never fail with an error. A swap that
//! cannot happen returns `false`, a missing item returns `None`. Errors are
//! reserved for misuse of the ambient layers around the vendors.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised around the trading operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A vendor's lock was poisoned by a panic in another thread.
    ///
    /// ## When This Occurs
    /// - A closure passed to `with_vendor_mut` panicked
    /// - The inventory may be half-updated, so the vendor is unusable
    #[error("Vendor {vendor} is unavailable: lock poisoned")]
    LockPoisoned { vendor: String },

    /// Both sides of a shared swap are the same vendor.
    #[error("Vendor {vendor} cannot swap with itself")]
    SameVendor { vendor: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Only produced by the checked constructors; `Item::new` accepts anything.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
