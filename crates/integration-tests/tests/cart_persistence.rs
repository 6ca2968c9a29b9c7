//! Cart snapshot behaviour across simulated page reloads.

use maison_core::{Price, ProductId};
use maison_integration_tests::product;
use maison_storefront::storage::keys;
use maison_storefront::{CartStore, FileStorage, Storage};

// =============================================================================
// Scenario Tests
// =============================================================================

#[test]
fn test_add_clamp_remove_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let mut cart = CartStore::load(FileStorage::new(dir.path()));
    let p1 = product("p1", 2000, 5);

    for _ in 0..3 {
        cart.add_item(&p1);
    }
    assert_eq!(cart.total_items(), 3);
    assert_eq!(cart.total_price(), Price::from_cents(6000));

    cart.set_quantity(&ProductId::new("p1"), 10);
    assert_eq!(cart.item(&ProductId::new("p1")).unwrap().quantity, 5);

    cart.remove_item(&ProductId::new("p1"));
    assert!(cart.items().is_empty());
}

#[test]
fn test_add_count_is_min_of_calls_and_stock() {
    for (calls, stock) in [(1_u32, 5_u32), (5, 5), (9, 5), (3, 1)] {
        let mut cart = CartStore::new(maison_storefront::MemoryStorage::new());
        let p = product("p", 100, stock);
        for _ in 0..calls {
            cart.add_item(&p);
        }
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, calls.min(stock));
    }
}

// =============================================================================
// Reload Tests
// =============================================================================

#[test]
fn test_reload_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());

    let mut cart = CartStore::load(storage.clone());
    cart.add_item(&product("a", 1250, 4));
    cart.add_item(&product("b", 899, 2));
    cart.add_item(&product("a", 1250, 4));
    cart.toggle_panel();
    assert!(cart.is_open());
    let before = cart.items().to_vec();
    drop(cart);

    let reloaded = CartStore::load(storage);
    assert_eq!(reloaded.items(), before.as_slice());
    assert!(!reloaded.is_open());
    assert_eq!(reloaded.total_price(), Price::from_cents(1250 * 2 + 899));
}

#[test]
fn test_snapshot_uses_browser_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let mut cart = CartStore::new(storage.clone());
    cart.add_item(&product("a", 1950, 4));

    let raw = storage.get(keys::CART).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": "a",
            "name": "Product a",
            "brand": "Maison",
            "image": "https://cdn.example.com/a.jpg",
            "price": 19.5,
            "stock": 4,
            "quantity": 1
        }])
    );
}

#[test]
fn test_reads_snapshot_written_by_browser() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage
        .set(
            keys::CART,
            r#"[{"id":"9","name":"Shawl","brand":"Kaarigar","image":"s.jpg","price":65,"stock":8,"quantity":2}]"#,
        )
        .unwrap();

    let cart = CartStore::load(storage);
    assert_eq!(cart.total_items(), 2);
    assert_eq!(cart.total_price(), Price::from_cents(13_000));
}

#[test]
fn test_corrupt_snapshot_starts_empty_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.set(keys::CART, "\u{0}garbage").unwrap();

    let mut cart = CartStore::load(storage.clone());
    assert!(cart.is_empty());

    cart.add_item(&product("a", 100, 1));
    let reloaded = CartStore::load(storage);
    assert_eq!(reloaded.total_items(), 1);
}

#[test]
fn test_clear_persists_empty_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let mut cart = CartStore::new(storage.clone());
    cart.add_item(&product("a", 100, 3));
    cart.clear();
    assert_eq!(cart.total_items(), 0);

    assert_eq!(storage.get(keys::CART).unwrap().as_deref(), Some("[]"));
    assert!(CartStore::load(storage).is_empty());
}

#[test]
fn test_last_writer_wins_between_sessions() {
    // Two sessions sharing one snapshot do not see each other's writes.
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let mut first = CartStore::load(storage.clone());
    let mut second = CartStore::load(storage.clone());

    first.add_item(&product("a", 100, 5));
    second.add_item(&product("b", 100, 5));

    let reloaded = CartStore::load(storage);
    let ids: Vec<&str> = reloaded.items().iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["b"]);
}
