//! # Shared Vendors
//!
//! Thread-safe handles for vendors that trade from several threads.
//!
//! ## Lock Ordering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Two-Vendor Swap Under Locks                          │
//! │                                                                         │
//! │  Thread 1: alice.swap_items(&bob, ..)    Thread 2: bob.swap_items(&alice│
//! │                                                                         │
//! │  Naive:   T1 locks alice, waits on bob   T2 locks bob, waits on alice  │
//! │           ──► DEADLOCK                                                  │
//! │                                                                         │
//! │  Here:    both threads lock the vendor with the SMALLER id first       │
//! │           ──► one waits for the other, both complete                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both vendors stay locked for the whole check-then-act swap, so the
//! add/remove pairs on each side are never interleaved with another swap.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::vendor::Vendor;

/// Point-in-time copy of a shared vendor, for reports and UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VendorSnapshot {
    #[ts(as = "String")]
    pub id: Uuid,
    pub name: String,
    pub inventory: Vec<Item>,
}

/// A vendor behind `Arc<Mutex<_>>` with a stable identity.
///
/// Cloning the handle shares the same vendor (and the same id).
#[derive(Debug, Clone)]
pub struct SharedVendor {
    id: Uuid,
    name: String,
    vendor: Arc<Mutex<Vendor>>,
}

impl SharedVendor {
    /// Wraps `vendor` under a fresh random id.
    pub fn new(name: impl Into<String>, vendor: Vendor) -> Self {
        Self::with_id(Uuid::new_v4(), name, vendor)
    }

    /// Wraps `vendor` under a caller-chosen id.
    pub fn with_id(id: Uuid, name: impl Into<String>, vendor: Vendor) -> Self {
        SharedVendor {
            id,
            name: name.into(),
            vendor: Arc::new(Mutex::new(vendor)),
        }
    }

    #[inline]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Executes a function with read access to the vendor.
    ///
    /// ## Usage
    /// ```rust
    /// use swap_meet_core::{Item, SharedVendor, Vendor};
    ///
    /// let vendor = Vendor::with_inventory(vec![Item::new("Decor", 3)]);
    /// let shared = SharedVendor::new("Alice", vendor);
    /// let count = shared.with_vendor(|vendor| vendor.len()).unwrap();
    /// assert_eq!(count, 1);
    /// ```
    pub fn with_vendor<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&Vendor) -> R,
    {
        let vendor = self.lock()?;
        Ok(f(&vendor))
    }

    /// Executes a function with write access to the vendor.
    pub fn with_vendor_mut<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&mut Vendor) -> R,
    {
        let mut vendor = self.lock()?;
        Ok(f(&mut vendor))
    }

    /// Copies the current state out.
    pub fn snapshot(&self) -> CoreResult<VendorSnapshot> {
        let inventory = self.with_vendor(|vendor| vendor.inventory().to_vec())?;
        Ok(VendorSnapshot {
            id: self.id,
            name: self.name.clone(),
            inventory,
        })
    }

    /// Locked counterpart of [`Vendor::swap_items`].
    pub fn swap_items(
        &self,
        peer: &SharedVendor,
        my_item: &Item,
        their_item: &Item,
    ) -> CoreResult<bool> {
        self.with_pair(peer, |mine, theirs| {
            mine.swap_items(theirs, my_item, their_item)
        })
    }

    /// Locked counterpart of [`Vendor::swap_first_item`].
    pub fn swap_first_item(&self, peer: &SharedVendor) -> CoreResult<bool> {
        self.with_pair(peer, |mine, theirs| mine.swap_first_item(theirs))
    }

    /// Locked counterpart of [`Vendor::swap_best_by_category`].
    pub fn swap_best_by_category(
        &self,
        peer: &SharedVendor,
        my_priority: &str,
        their_priority: &str,
    ) -> CoreResult<bool> {
        self.with_pair(peer, |mine, theirs| {
            mine.swap_best_by_category(theirs, my_priority, their_priority)
        })
    }

    fn lock(&self) -> CoreResult<MutexGuard<'_, Vendor>> {
        self.vendor.lock().map_err(|_| CoreError::LockPoisoned {
            vendor: self.name.clone(),
        })
    }

    /// Locks both vendors in ascending id order and runs `f(self, peer)`.
    fn with_pair<F, R>(&self, peer: &SharedVendor, f: F) -> CoreResult<R>
    where
        F: FnOnce(&mut Vendor, &mut Vendor) -> R,
    {
        if self.id == peer.id || Arc::ptr_eq(&self.vendor, &peer.vendor) {
            return Err(CoreError::SameVendor {
                vendor: self.name.clone(),
            });
        }

        debug!(vendor = %self.name, peer = %peer.name, "locking vendors for swap");

        if self.id < peer.id {
            let mut mine = self.lock()?;
            let mut theirs = peer.lock()?;
            Ok(f(&mut mine, &mut theirs))
        } else {
            let mut theirs = peer.lock()?;
            let mut mine = self.lock()?;
            Ok(f(&mut mine, &mut theirs))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn item(category: &str, condition: u32) -> Item {
        Item::new(category, condition)
    }

    #[test]
    fn test_shared_swap_items() {
        let alice = SharedVendor::new("Alice", Vendor::with_inventory(vec![item("toys", 3)]));
        let bob = SharedVendor::new("Bob", Vendor::with_inventory(vec![item("books", 5)]));

        assert!(alice.swap_items(&bob, &item("toys", 3), &item("books", 5)).unwrap());
        assert_eq!(alice.snapshot().unwrap().inventory, vec![item("books", 5)]);
        assert_eq!(bob.snapshot().unwrap().inventory, vec![item("toys", 3)]);
    }

    #[test]
    fn test_shared_swap_respects_caller_side_regardless_of_lock_order() {
        let low = Uuid::from_u128(1);
        let high = Uuid::from_u128(2);
        let a = SharedVendor::with_id(high, "A", Vendor::with_inventory(vec![item("a", 1)]));
        let b = SharedVendor::with_id(low, "B", Vendor::with_inventory(vec![item("b", 2)]));

        // a has the larger id, so b is locked first, but a is still "mine"
        assert!(a.swap_items(&b, &item("a", 1), &item("b", 2)).unwrap());
        assert_eq!(a.snapshot().unwrap().inventory, vec![item("b", 2)]);
        assert_eq!(b.snapshot().unwrap().inventory, vec![item("a", 1)]);
    }

    #[test]
    fn test_shared_swap_with_itself_is_rejected() {
        let alice = SharedVendor::new("Alice", Vendor::with_inventory(vec![item("toys", 3)]));
        let same = alice.clone();

        let err = alice.swap_first_item(&same).unwrap_err();
        assert!(matches!(err, CoreError::SameVendor { .. }));
    }

    #[test]
    fn test_shared_swap_first_item_empty() {
        let alice = SharedVendor::new("Alice", Vendor::new());
        let bob = SharedVendor::new("Bob", Vendor::with_inventory(vec![item("x", 1)]));

        assert!(!alice.swap_first_item(&bob).unwrap());
        assert_eq!(bob.with_vendor(|v| v.len()).unwrap(), 1);
    }

    #[test]
    fn test_shared_swap_best_by_category() {
        let alice = SharedVendor::new(
            "Alice",
            Vendor::with_inventory(vec![item("tools", 2), item("tools", 7)]),
        );
        let bob = SharedVendor::new(
            "Bob",
            Vendor::with_inventory(vec![item("tools", 1), item("tools", 9)]),
        );

        assert!(alice.swap_best_by_category(&bob, "tools", "tools").unwrap());
        assert!(alice.with_vendor(|v| v.contains(&item("tools", 9))).unwrap());
        assert!(bob.with_vendor(|v| v.contains(&item("tools", 7))).unwrap());
    }

    #[test]
    fn test_opposing_concurrent_swaps_do_not_deadlock() {
        let alice = SharedVendor::new("Alice", Vendor::with_inventory(vec![item("a", 1)]));
        let bob = SharedVendor::new("Bob", Vendor::with_inventory(vec![item("b", 2)]));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let (first, second) = if i % 2 == 0 {
                    (alice.clone(), bob.clone())
                } else {
                    (bob.clone(), alice.clone())
                };
                thread::spawn(move || {
                    for _ in 0..200 {
                        first.swap_first_item(&second).unwrap();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Every swap is one-for-one, so the pair still holds two items
        let total =
            alice.with_vendor(|v| v.len()).unwrap() + bob.with_vendor(|v| v.len()).unwrap();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_poisoned_vendor_reports_error() {
        let alice = SharedVendor::new("Alice", Vendor::new());
        let bob = SharedVendor::new("Bob", Vendor::new());

        let poisoner = alice.clone();
        let _ = thread::spawn(move || {
            let _ = poisoner.with_vendor_mut(|_: &mut Vendor| panic!("boom"));
        })
        .join();

        let err = alice.swap_first_item(&bob).unwrap_err();
        assert!(matches!(err, CoreError::LockPoisoned { ref vendor } if vendor == "Alice"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let id = Uuid::from_u128(7);
        let vendor = Vendor::with_inventory(vec![item("toys", 3)]);
        let shared = SharedVendor::with_id(id, "Alice", vendor);
        let json = serde_json::to_value(shared.snapshot().unwrap()).unwrap();

        assert_eq!(json["name"], "Alice");
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["inventory"][0]["category"], "toys");
    }
}
