//! Persistence: seed install, round-trips, corruption recovery, reopen.

#![allow(clippy::unwrap_used)]

use mango_stand_core::ProductId;
use mango_stand_integration_tests::valid_draft;
use mango_stand_storefront::Store;
use mango_stand_storefront::models::{CartLine, Product};
use mango_stand_storefront::seed::seed_catalog;
use mango_stand_storefront::storage::{
    self, CART_KEY, FileStore, KeyValueStore, MemoryStore, PRODUCTS_KEY,
};

// =============================================================================
// First run
// =============================================================================

#[test]
fn test_first_run_installs_and_persists_seed_catalog() {
    let store = Store::open(MemoryStore::new());

    assert_eq!(store.products(), seed_catalog());

    let persisted: Vec<Product> = storage::load(store.storage(), PRODUCTS_KEY).unwrap().unwrap();
    assert_eq!(persisted, seed_catalog());
}

#[test]
fn test_second_run_does_not_reseed() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = Store::open(FileStore::open(dir.path()).unwrap());
        let ids: Vec<_> = store.products().iter().map(|p| p.id.clone()).collect();
        for id in &ids {
            store.delete_product(id);
        }
        assert!(store.products().is_empty());
    }

    // An intentionally emptied catalog stays empty across sessions.
    let store = Store::open(FileStore::open(dir.path()).unwrap());
    assert!(store.products().is_empty());
}

// =============================================================================
// Round-trips
// =============================================================================

#[test]
fn test_products_and_cart_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();

    let (products, cart) = {
        let mut store = Store::open(FileStore::open(dir.path()).unwrap());
        store.add_product(valid_draft("Soap", "3.20")).unwrap();
        store.add_to_cart(&ProductId::new("1")).unwrap();
        store.add_to_cart(&ProductId::new("1")).unwrap();
        store.add_to_cart(&ProductId::new("2")).unwrap();
        (store.products().to_vec(), store.cart().to_vec())
    };

    let reopened = Store::open(FileStore::open(dir.path()).unwrap());
    assert_eq!(reopened.products(), products);
    assert_eq!(reopened.cart(), cart);
}

#[test]
fn test_raw_save_load_round_trip_is_structural_equality() {
    let mut raw = MemoryStore::new();
    let cart = vec![CartLine {
        id: ProductId::new("9"),
        name: "Mango Salsa".to_owned(),
        price: mango_stand_core::Price::parse("5.75").unwrap(),
        img: "https://picsum.photos/seed/salsa/400/300".to_owned(),
        quantity: 3,
    }];

    storage::save(&mut raw, CART_KEY, &cart).unwrap();
    let back: Vec<CartLine> = storage::load(&raw, CART_KEY).unwrap().unwrap();
    assert_eq!(back, cart);
}

// =============================================================================
// Corruption recovery
// =============================================================================

#[test]
fn test_corrupt_records_never_block_opening() {
    let mut raw = MemoryStore::new();
    raw.write(PRODUCTS_KEY, "][ definitely not json").unwrap();
    raw.write(CART_KEY, "{\"wrong\": \"shape\"}").unwrap();

    let store = Store::open(raw);

    // Both slices degrade to defaults: seed catalog, empty cart.
    assert_eq!(store.products(), seed_catalog());
    assert!(store.cart().is_empty());

    // And the catalog default was re-persisted as the new baseline.
    let persisted: Vec<Product> = storage::load(store.storage(), PRODUCTS_KEY).unwrap().unwrap();
    assert_eq!(persisted, seed_catalog());
}

#[test]
fn test_corrupt_cart_file_on_disk_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "not json at all").unwrap();

    let store = Store::open(FileStore::open(dir.path()).unwrap());
    assert!(store.cart().is_empty());
    assert_eq!(store.products(), seed_catalog());
}

// =============================================================================
// Mutation-then-persist discipline
// =============================================================================

#[test]
fn test_every_mutation_is_visible_to_a_parallel_reader() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = Store::open(FileStore::open(dir.path()).unwrap());
    let reader = FileStore::open(dir.path()).unwrap();

    store.add_to_cart(&ProductId::new("1")).unwrap();
    let on_disk: Vec<CartLine> = storage::load(&reader, CART_KEY).unwrap().unwrap();
    assert_eq!(on_disk, store.cart());

    store.add_product(valid_draft("Soap", "3.20")).unwrap();
    let on_disk: Vec<Product> = storage::load(&reader, PRODUCTS_KEY).unwrap().unwrap();
    assert_eq!(on_disk, store.products());
}
