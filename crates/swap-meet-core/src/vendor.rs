//! # Vendor
//!
//! A vendor owns an ordered inventory of [`Item`]s and trades them with
//! other vendors.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Vendor Operations                                    │
//! │                                                                         │
//! │  Inventory primitives        Queries                    Swaps           │
//! │  ────────────────────        ───────                    ─────           │
//! │  add()    → push to end      get_by_category()          swap_items()    │
//! │  remove() → first match      get_best_by_category()     swap_first_item │
//! │                                                         swap_best_by_   │
//! │                                                           category()    │
//! │                                                                         │
//! │  Every swap is check-then-act: the preconditions are checked on both   │
//! │  vendors first, and nothing changes unless all of them hold.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Sentinels, Not Errors
//! A failed removal returns `None`, a swap that cannot happen returns
//! `false`. Neither is exceptional at a swap meet.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::item::Item;

/// A party at the swap meet.
///
/// ## Invariants
/// - Inventory order is insertion order; `add` appends, `remove` takes the
///   first value-equal item
/// - Duplicates (value-equal items) are allowed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    inventory: Vec<Item>,
}

impl Vendor {
    /// Creates a vendor with an empty inventory.
    pub fn new() -> Self {
        Vendor::default()
    }

    /// Creates a vendor that starts out holding `inventory`, in order.
    pub fn with_inventory(inventory: Vec<Item>) -> Self {
        Vendor { inventory }
    }

    /// The current inventory, in order.
    #[inline]
    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    /// Consumes the vendor and hands back its inventory.
    pub fn into_inventory(self) -> Vec<Item> {
        self.inventory
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Checks for a value-equal item.
    pub fn contains(&self, item: &Item) -> bool {
        self.inventory.contains(item)
    }

    // =========================================================================
    // Inventory Primitives
    // =========================================================================

    /// Appends `item` to the end of the inventory and returns it.
    ///
    /// ## Example
    /// ```rust
    /// use swap_meet_core::{Item, Vendor};
    ///
    /// let mut vendor = Vendor::new();
    /// let added = vendor.add(Item::new("Decor", 2)).clone();
    /// assert_eq!(added, Item::new("Decor", 2));
    /// assert_eq!(vendor.len(), 1);
    /// ```
    pub fn add(&mut self, item: Item) -> &Item {
        let index = self.inventory.len();
        self.inventory.push(item);
        &self.inventory[index]
    }

    /// Removes the first item value-equal to `item`.
    ///
    /// ## Returns
    /// - `Some(removed)` if a match was found
    /// - `None` otherwise, with the inventory untouched
    pub fn remove(&mut self, item: &Item) -> Option<Item> {
        let position = self.inventory.iter().position(|held| held == item)?;
        Some(self.inventory.remove(position))
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All items in `category`, in inventory order.
    pub fn get_by_category(&self, category: &str) -> Vec<&Item> {
        self.inventory
            .iter()
            .filter(|item| item.is_in(category))
            .collect()
    }

    /// The item in `category` with the highest condition.
    ///
    /// Ties go to the item that appears first in the inventory.
    ///
    /// ## Example
    /// ```rust
    /// use swap_meet_core::{Item, Vendor};
    ///
    /// let vendor = Vendor::with_inventory(vec![
    ///     Item::new("Clothing", 2),
    ///     Item::new("Decor", 5),
    ///     Item::new("Clothing", 4),
    /// ]);
    /// assert_eq!(vendor.get_best_by_category("Clothing"), Some(&Item::new("Clothing", 4)));
    /// assert_eq!(vendor.get_best_by_category("Electronics"), None);
    /// ```
    pub fn get_best_by_category(&self, category: &str) -> Option<&Item> {
        // Iterator::max_by_key keeps the LAST maximum, so fold by hand
        self.inventory
            .iter()
            .filter(|item| item.is_in(category))
            .fold(None, |best: Option<&Item>, item| match best {
                Some(current) if item.condition() <= current.condition() => Some(current),
                _ => Some(item),
            })
    }

    // =========================================================================
    // Swaps
    // =========================================================================

    /// Trades `my_item` (held by `self`) for `their_item` (held by `peer`).
    ///
    /// ## Protocol
    /// ```text
    /// my_item in self?  ──no──► false (nothing changes)
    ///      │ yes
    /// their_item in peer? ──no──► false (nothing changes)
    ///      │ yes
    ///      ▼
    /// self.add(their_item)   self.remove(my_item)
    /// peer.add(my_item)      peer.remove(their_item)
    ///      │
    ///      ▼
    ///    true
    /// ```
    ///
    /// Each side adds before it removes. When both items are value-equal
    /// the removal therefore takes the older copy, and the traded item ends
    /// up at the back of each inventory.
    pub fn swap_items(&mut self, peer: &mut Vendor, my_item: &Item, their_item: &Item) -> bool {
        if !self.contains(my_item) {
            debug!(item = %my_item, "swap rejected: offered item not in own inventory");
            return false;
        }
        if !peer.contains(their_item) {
            debug!(item = %their_item, "swap rejected: requested item not in peer inventory");
            return false;
        }

        self.add(their_item.clone());
        self.remove(my_item);

        peer.add(my_item.clone());
        peer.remove(their_item);

        debug!(gave = %my_item, got = %their_item, "swap completed");
        true
    }

    /// Trades the first item of each inventory.
    ///
    /// Returns `false` without changes if either inventory is empty, and
    /// `true` otherwise.
    pub fn swap_first_item(&mut self, peer: &mut Vendor) -> bool {
        let (Some(mine), Some(theirs)) = (
            self.inventory.first().cloned(),
            peer.inventory.first().cloned(),
        ) else {
            debug!(
                own_empty = self.is_empty(),
                peer_empty = peer.is_empty(),
                "first-item swap rejected: empty inventory"
            );
            return false;
        };

        // Both items were just read from the inventories, so this cannot fail
        self.swap_items(peer, &mine, &theirs);
        true
    }

    /// Trades each side's best item in the category the other side wants.
    ///
    /// `my_priority` is the category `self` wants from `peer`;
    /// `their_priority` is the category `peer` wants from `self`.
    ///
    /// ## Guard
    /// Both vendors must hold MORE THAN ONE item in the wanted category.
    /// A vendor with a single matching item keeps it and nothing is traded.
    ///
    /// ## Example
    /// ```rust
    /// use swap_meet_core::{Item, Vendor};
    ///
    /// let mut alice = Vendor::with_inventory(vec![Item::new("tools", 2), Item::new("tools", 7)]);
    /// let mut bob = Vendor::with_inventory(vec![Item::new("tools", 1), Item::new("tools", 9)]);
    ///
    /// assert!(alice.swap_best_by_category(&mut bob, "tools", "tools"));
    /// assert!(alice.contains(&Item::new("tools", 9)));
    /// assert!(bob.contains(&Item::new("tools", 7)));
    /// ```
    pub fn swap_best_by_category(
        &mut self,
        peer: &mut Vendor,
        my_priority: &str,
        their_priority: &str,
    ) -> bool {
        let my_matches = self.get_by_category(their_priority).len();
        let their_matches = peer.get_by_category(my_priority).len();

        if my_matches <= 1 || their_matches <= 1 {
            debug!(
                my_matches,
                their_matches,
                my_priority,
                their_priority,
                "best-by-category swap rejected"
            );
            return false;
        }

        let (Some(my_best), Some(their_best)) = (
            self.get_best_by_category(their_priority).cloned(),
            peer.get_best_by_category(my_priority).cloned(),
        ) else {
            return false;
        };

        self.swap_items(peer, &my_best, &their_best);
        true
    }
}

impl From<Vec<Item>> for Vendor {
    fn from(inventory: Vec<Item>) -> Self {
        Vendor::with_inventory(inventory)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
