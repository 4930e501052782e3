//! # Items
//!
//! The goods that change hands at a swap meet.
//!
//! ## Shape of an Item
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Item                                         │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    category     │        │    Condition    │                        │
//! │  │  ─────────────  │        │  ─────────────  │                        │
//! │  │  "clothing"     │        │  u32 rating     │                        │
//! │  │  grouping key   │        │  higher=better  │                        │
//! │  └─────────────────┘        └─────────────────┘                        │
//! │                                                                         │
//! │  Identity is the VALUE: two items with the same category and           │
//! │  condition are interchangeable for every vendor operation.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::CoreResult;
use crate::validation::{validate_category, validate_condition};

/// Category for wearable items.
pub const CLOTHING: &str = "Clothing";

/// Category for decorative items.
pub const DECOR: &str = "Decor";

/// Category for electronic items.
pub const ELECTRONICS: &str = "Electronics";

// =============================================================================
// Condition
// =============================================================================

/// Quality rating of an item. Higher is better.
///
/// Ratings are conventionally 0 to 5 (see [`Condition::description`]), but
/// only [`Item::try_new`] enforces that. Ordering is plain integer ordering.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export)]
pub struct Condition(u32);

impl Condition {
    /// Creates a condition from a raw rating.
    #[inline]
    pub const fn new(rating: u32) -> Self {
        Condition(rating)
    }

    /// Returns the raw rating.
    #[inline]
    pub const fn rating(&self) -> u32 {
        self.0
    }

    /// Human-readable wording for the rating.
    ///
    /// ## Scale
    /// ```text
    /// 0  Heavily used
    /// 1  Well worn
    /// 2  Fair
    /// 3  Good
    /// 4  Like new
    /// 5+ Mint
    /// ```
    pub const fn description(&self) -> &'static str {
        match self.0 {
            0 => "Heavily used",
            1 => "Well worn",
            2 => "Fair",
            3 => "Good",
            4 => "Like new",
            _ => "Mint",
        }
    }
}

impl From<u32> for Condition {
    #[inline]
    fn from(rating: u32) -> Self {
        Condition(rating)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// A categorized, condition-rated item.
///
/// Items have no mutation methods. Once built they only move between
/// vendors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    category: String,
    condition: Condition,
}

impl Item {
    /// Creates an item without any checks.
    ///
    /// ## Example
    /// ```rust
    /// use swap_meet_core::Item;
    ///
    /// let scarf = Item::new("Clothing", 4);
    /// assert_eq!(scarf.category(), "Clothing");
    /// assert_eq!(scarf.condition().rating(), 4);
    /// ```
    pub fn new(category: impl Into<String>, condition: impl Into<Condition>) -> Self {
        Item {
            category: category.into(),
            condition: condition.into(),
        }
    }

    /// Creates an item after validating both attributes.
    ///
    /// The category is stored trimmed.
    ///
    /// ## Example
    /// ```rust
    /// use swap_meet_core::Item;
    ///
    /// assert!(Item::try_new(" Decor ", 3).is_ok());
    /// assert!(Item::try_new("", 3).is_err());
    /// assert!(Item::try_new("Decor", 11).is_err());
    /// ```
    pub fn try_new(category: &str, condition: u32) -> CoreResult<Self> {
        let category = validate_category(category)?;
        validate_condition(condition)?;
        Ok(Item::new(category, condition))
    }

    /// The grouping key used by category queries.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Checks whether the item belongs to `category` (exact, case-sensitive).
    #[inline]
    pub fn is_in(&self, category: &str) -> bool {
        self.category == category
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (condition {}: {})",
            self.category,
            self.condition,
            self.condition.description()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_value_equality() {
        assert_eq!(Item::new("toys", 3), Item::new("toys", 3));
        assert_ne!(Item::new("toys", 3), Item::new("toys", 4));
        assert_ne!(Item::new("toys", 3), Item::new("books", 3));
    }

    #[test]
    fn test_condition_ordering() {
        assert!(Condition::new(5) > Condition::new(4));
        assert_eq!(Condition::default().rating(), 0);
    }

    #[test]
    fn test_condition_description() {
        assert_eq!(Condition::new(0).description(), "Heavily used");
        assert_eq!(Condition::new(2).description(), "Fair");
        assert_eq!(Condition::new(5).description(), "Mint");
        assert_eq!(Condition::new(42).description(), "Mint");
    }

    #[test]
    fn test_item_display() {
        let item = Item::new(ELECTRONICS, 3);
        assert_eq!(item.to_string(), "Electronics (condition 3: Good)");
    }

    #[test]
    fn test_try_new_trims_category() {
        let item = Item::try_new("  Decor  ", 1).unwrap();
        assert_eq!(item.category(), DECOR);
    }

    #[test]
    fn test_is_in_is_case_sensitive() {
        let item = Item::new(CLOTHING, 1);
        assert!(item.is_in("Clothing"));
        assert!(!item.is_in("clothing"));
    }

    #[test]
    fn test_item_serializes_condition_as_number() {
        let json = serde_json::to_string(&Item::new("toys", 3)).unwrap();
        assert_eq!(json, r#"{"category":"toys","condition":3}"#);
    }
}
