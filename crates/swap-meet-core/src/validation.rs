//! # Validation Module
//!
//! Input validation for items entering a swap meet from untrusted sources
//! (config files, user input).
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config loading (swap-meet-sim)                               │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── Calls Item::try_new for every scripted item                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Category: non-empty, bounded length                               │
//! │  └── Condition: on the 0-5 scale                                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Vendor operations                                            │
//! │  └── No checks at all, equality/category/condition only                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use swap_meet_core::validation::{validate_category, validate_condition};
//!
//! assert_eq!(validate_category("  decor ").unwrap(), "decor");
//! assert!(validate_condition(4).is_ok());
//! assert!(validate_condition(9).is_err());
//! ```

use crate::error::ValidationError;
use crate::{MAX_CATEGORY_LEN, MAX_CONDITION};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates an item category.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most `MAX_CATEGORY_LEN` (50) characters
///
/// ## Returns
/// The trimmed category.
pub fn validate_category(category: &str) -> ValidationResult<String> {
    let category = category.trim();

    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_CATEGORY_LEN,
        });
    }

    Ok(category.to_string())
}

/// Validates a condition rating.
///
/// ## Rules
/// - Must be between 0 and `MAX_CONDITION` (5), inclusive
pub fn validate_condition(condition: u32) -> ValidationResult<()> {
    if condition > MAX_CONDITION {
        return Err(ValidationError::OutOfRange {
            field: "condition".to_string(),
            min: 0,
            max: i64::from(MAX_CONDITION),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
