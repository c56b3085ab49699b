use super::*;

use serde::Deserialize;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Entry {
    id: String,
    count: u32,
}

#[test]
fn memory_store_round_trips() {
    let store = MemoryStore::new();
    assert_eq!(store.get("theme"), None);
    store.set("theme", "dark").unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
}

#[test]
fn memory_store_overwrites_existing_value() {
    let store = MemoryStore::new();
    store.set("language", "en").unwrap();
    store.set("language", "ar").unwrap();
    assert_eq!(store.get("language").as_deref(), Some("ar"));
}

#[test]
fn load_json_missing_key_is_none() {
    let store = MemoryStore::new();
    let loaded: Option<Entry> = load_json(&store, "cart").unwrap();
    assert!(loaded.is_none());
}

#[test]
fn save_json_then_load_json_returns_value() {
    let store = MemoryStore::new();
    let entry = Entry { id: "a".into(), count: 2 };
    save_json(&store, "entry", &entry).unwrap();
    assert_eq!(store.get("entry").as_deref(), Some(r#"{"id":"a","count":2}"#));
    let loaded: Option<Entry> = load_json(&store, "entry").unwrap();
    assert_eq!(loaded, Some(entry));
}

#[test]
fn load_json_corrupt_value_is_json_error() {
    let store = MemoryStore::new();
    store.set("cart", "[{").unwrap();
    let err = load_json::<Vec<Entry>>(&store, "cart").unwrap_err();
    assert!(matches!(err, SiteError::Json(_)));
}

#[test]
fn load_list_treats_corrupt_entry_as_empty() {
    let store = MemoryStore::new();
    store.set("favorites", "not json").unwrap();
    let list: Vec<Entry> = load_list(&store, "favorites");
    assert!(list.is_empty());
}

#[test]
fn load_list_reads_stored_entries() {
    let store = MemoryStore::new();
    store.set("cart", r#"[{"id":"x","count":1}]"#).unwrap();
    let list: Vec<Entry> = load_list(&store, "cart");
    assert_eq!(list, vec![Entry { id: "x".into(), count: 1 }]);
}
