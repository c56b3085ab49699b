use super::*;

use crate::util::storage::MemoryStore;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_display_matches_attribute_value() {
    assert_eq!(Theme::Dark.to_string(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
}

// =============================================================
// ThemeState
// =============================================================

#[test]
fn load_without_stored_value_uses_site_default() {
    let store = MemoryStore::new();
    assert_eq!(ThemeState::load(&store, Theme::Light).current(), Theme::Light);
    assert_eq!(ThemeState::load(&store, Theme::Dark).current(), Theme::Dark);
}

#[test]
fn load_ignores_garbage_stored_value() {
    let store = MemoryStore::new();
    store.set(THEME_KEY, "sepia").unwrap();
    assert_eq!(ThemeState::load(&store, Theme::Dark).current(), Theme::Dark);
}

#[test]
fn toggle_persists_so_reload_reads_toggled_value() {
    let store = MemoryStore::new();
    let mut state = ThemeState::load(&store, Theme::Light);
    assert_eq!(state.toggle(&store), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

    let reloaded = ThemeState::load(&store, Theme::Light);
    assert_eq!(reloaded.current(), Theme::Dark);
}

#[test]
fn toggle_twice_returns_to_start() {
    let store = MemoryStore::new();
    let mut state = ThemeState::load(&store, Theme::Dark);
    state.toggle(&store);
    state.toggle(&store);
    assert_eq!(state.current(), Theme::Dark);
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
}
