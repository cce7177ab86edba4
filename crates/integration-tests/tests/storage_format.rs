//! The stored wire formats: cart and address records as JSON.

use rust_decimal::Decimal;
use serde_json::Value;
use sofra_core::{Currency, MenuItemId};
use sofra_widget::cart::CartStore;
use sofra_widget::catalog::Catalog;
use sofra_widget::storage::{KeyValueStorage, MemoryStorage};

#[test]
fn test_cart_serializes_as_line_array() {
    let storage = MemoryStorage::new();
    let catalog = Catalog::default_menu(Currency::TRY);
    let store = CartStore::new(&storage, "cart");

    store.add_item(&catalog, MenuItemId::new(1));
    store.add_item(&catalog, MenuItemId::new(1));
    store.add_item(&catalog, MenuItemId::new(4));

    let raw = storage.get("cart").expect("cart persisted");
    let value: Value = serde_json::from_str(&raw).expect("valid JSON");

    let lines = value.as_array().expect("top level is an array");
    assert_eq!(lines.len(), 2);

    let first = lines.first().expect("first line");
    assert_eq!(first["id"], 1);
    assert_eq!(first["name"], "Hamburger");
    assert_eq!(first["quantity"], 2);
}

#[test]
fn test_stored_cart_round_trips_exactly() {
    let storage = MemoryStorage::new();
    let catalog = Catalog::default_menu(Currency::TRY);
    let store = CartStore::new(&storage, "cart");

    store.add_item(&catalog, MenuItemId::new(3));
    let saved = store.add_item(&catalog, MenuItemId::new(2));

    let reloaded = store.load();
    assert_eq!(reloaded, saved);
    assert_eq!(
        reloaded.lines().first().map(|l| l.unit_price.amount),
        Some(Decimal::from(260))
    );
}

#[test]
fn test_foreign_garbage_under_cart_key_is_recovered() {
    let storage = MemoryStorage::new();
    storage.set("cart", "\"just a string\"");
    let store = CartStore::new(&storage, "cart");

    // A well-formed JSON value of the wrong shape also reads as empty.
    assert!(store.load().is_empty());
}
