//! End-to-end trading scenarios through the public API.

use swap_meet_core::{Item, Vendor, CLOTHING, DECOR, ELECTRONICS};

#[test]
fn test_direct_swap_between_two_vendors() {
    let mut a = Vendor::with_inventory(vec![Item::new("toys", 3)]);
    let mut b = Vendor::with_inventory(vec![Item::new("books", 5)]);

    let mine = a.inventory()[0].clone();
    let theirs = b.inventory()[0].clone();

    assert!(a.swap_items(&mut b, &mine, &theirs));
    assert_eq!(a.inventory(), &[Item::new("books", 5)]);
    assert_eq!(b.inventory(), &[Item::new("toys", 3)]);
}

#[test]
fn test_first_item_swap_with_empty_vendor() {
    let mut a = Vendor::new();
    let mut b = Vendor::with_inventory(vec![Item::new("x", 1)]);

    assert!(!a.swap_first_item(&mut b));
    assert!(a.is_empty());
    assert_eq!(b.inventory(), &[Item::new("x", 1)]);
}

#[test]
fn test_best_by_category_swap_trades_top_items() {
    let mut a = Vendor::with_inventory(vec![Item::new("tools", 2), Item::new("tools", 7)]);
    let mut b = Vendor::with_inventory(vec![Item::new("tools", 1), Item::new("tools", 9)]);

    assert!(a.swap_best_by_category(&mut b, "tools", "tools"));
    assert_eq!(a.inventory(), &[Item::new("tools", 2), Item::new("tools", 9)]);
    assert_eq!(b.inventory(), &[Item::new("tools", 1), Item::new("tools", 7)]);
}

#[test]
fn test_best_by_category_swap_blocked_by_single_item() {
    let mut a = Vendor::with_inventory(vec![Item::new("tools", 5)]);
    let mut b = Vendor::with_inventory(vec![Item::new("tools", 1), Item::new("tools", 9)]);

    assert!(!a.swap_best_by_category(&mut b, "tools", "tools"));
    assert_eq!(a.inventory(), &[Item::new("tools", 5)]);
    assert_eq!(b.inventory(), &[Item::new("tools", 1), Item::new("tools", 9)]);
}

#[test]
fn test_afternoon_at_the_swap_meet() {
    let mut tai = Vendor::with_inventory(vec![
        Item::new(CLOTHING, 2),
        Item::new(DECOR, 4),
        Item::new(CLOTHING, 4),
        Item::new(ELECTRONICS, 1),
    ]);
    let mut jesse = Vendor::with_inventory(vec![
        Item::new(ELECTRONICS, 3),
        Item::new(DECOR, 2),
        Item::new(ELECTRONICS, 5),
    ]);

    // Tai wants electronics, Jesse wants clothing
    assert!(tai.swap_best_by_category(&mut jesse, ELECTRONICS, CLOTHING));
    assert_eq!(tai.get_best_by_category(ELECTRONICS), Some(&Item::new(ELECTRONICS, 5)));
    assert_eq!(jesse.get_by_category(CLOTHING), vec![&Item::new(CLOTHING, 4)]);

    // Each side now holds a single item of what the other wants
    assert!(!jesse.swap_best_by_category(&mut tai, CLOTHING, ELECTRONICS));

    assert!(tai.swap_first_item(&mut jesse));
    assert_eq!(tai.len(), 4);
    assert_eq!(jesse.len(), 3);
    assert_eq!(jesse.inventory().last(), Some(&Item::new(CLOTHING, 2)));
}
