mod support;

use std::sync::Arc;

use insect_atlas::{
    Catalog, FavoritesLedger, InMemoryStore, InsectId, JsonFileStore, KeyValueStore,
};

#[test]
fn toggle_twice_restores_the_set() {
    support::init_tracing();
    let mut ledger = FavoritesLedger::load(InMemoryStore::new());
    ledger.toggle(InsectId(1)).unwrap();
    let before = ledger.ids().to_vec();

    ledger.toggle(InsectId(2)).unwrap();
    assert!(ledger.is_favorite(InsectId(2)));
    ledger.toggle(InsectId(2)).unwrap();

    assert!(!ledger.is_favorite(InsectId(2)));
    assert_eq!(ledger.ids(), before.as_slice());
}

#[test]
fn list_matches_the_set_in_catalog_order() {
    let catalog = Catalog::embedded().unwrap();
    let mut ledger = FavoritesLedger::load(InMemoryStore::new());
    for id in [3, 1, 4, 1] {
        ledger.toggle(InsectId(id)).unwrap();
    }

    let listed: Vec<u32> = ledger.list(&catalog).iter().map(|r| r.id.0).collect();
    assert_eq!(listed, vec![3, 4]);
}

#[test]
fn new_ledger_sees_persisted_favorites() {
    let store = InMemoryStore::new();
    {
        let mut ledger = FavoritesLedger::load(store.clone());
        ledger.toggle(InsectId(2)).unwrap();
        ledger.toggle(InsectId(4)).unwrap();
    }

    let ledger = FavoritesLedger::load(store);
    assert!(ledger.is_favorite(InsectId(2)));
    assert!(ledger.is_favorite(InsectId(4)));
    assert_eq!(ledger.len(), 2);
}

#[test]
fn malformed_or_wrongly_typed_values_load_empty() {
    for stored in ["", "{", "{\"ids\": [1]}", "[\"1\"]", "[1.5]"] {
        let store = InMemoryStore::with_entries([("favorites", stored)]);
        let ledger = FavoritesLedger::load(store);
        assert!(ledger.is_empty(), "{:?} should load empty", stored);
    }
}

#[test]
fn file_store_keeps_favorites_between_runs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    {
        let store = Arc::new(JsonFileStore::open(&path).unwrap());
        let mut ledger = FavoritesLedger::load(store);
        ledger.toggle(InsectId(3)).unwrap();
    }

    let store = Arc::new(JsonFileStore::open(&path).unwrap());
    assert_eq!(store.get("favorites").unwrap().as_deref(), Some("[3]"));
    let ledger = FavoritesLedger::load(store);
    assert!(ledger.is_favorite(InsectId(3)));
}

#[test]
fn failed_toggle_does_not_reach_disk_through_a_later_write() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("profile");
    let path = nested.join("prefs.json");

    let store = Arc::new(JsonFileStore::open(&path).unwrap());
    let mut ledger = FavoritesLedger::load(Arc::clone(&store));
    assert!(ledger.toggle(InsectId(2)).is_err());
    assert!(store.get("favorites").unwrap().is_none());

    std::fs::create_dir(&nested).unwrap();
    store.set("theme", "dark").unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert!(reopened.get("favorites").unwrap().is_none());
    assert!(FavoritesLedger::load(reopened).is_empty());
}
