//! Persisted key/value storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Theme, language, cart, favorites and the last registration all live in
//! `window.localStorage`. Controllers talk to the [`KeyValueStore`] trait so
//! the state machines can be exercised against [`MemoryStore`] in tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{SiteError, describe_js};

/// Synchronous string store with `localStorage` semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] when the backend refuses the write
    /// (quota exceeded, private mode).
    fn set(&self, key: &str, value: &str) -> Result<(), SiteError>;
}

/// In-process store. Used by tests and as the fallback when the browser
/// denies access to `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// `window.localStorage`.
#[derive(Debug, Clone)]
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    /// Open the page's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NoWindow`] outside a browser and
    /// [`SiteError::StorageUnavailable`] when storage access is blocked.
    pub fn local() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or(SiteError::NoWindow)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) | Err(_) => Err(SiteError::StorageUnavailable),
        }
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).unwrap_or_default()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SiteError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| SiteError::Storage(describe_js(&err)))
    }
}

/// Load a JSON value stored under `key`.
///
/// Returns `Ok(None)` when nothing is stored.
///
/// # Errors
///
/// Returns [`SiteError::Json`] when the stored text does not parse as `T`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, SiteError> {
    let Some(raw) = store.get(key) else {
        return Ok(None);
    };
    Ok(Some(serde_json::from_str(&raw)?))
}

/// Save `value` as JSON under `key`.
///
/// # Errors
///
/// Propagates serialization and storage failures.
pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), SiteError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Load a JSON list, treating a missing or corrupt entry as empty.
pub fn load_list<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Vec<T> {
    match load_json(store, key) {
        Ok(Some(list)) => list,
        Ok(None) => Vec::new(),
        Err(err) => {
            log::warn!("discarding unreadable {key:?} entry: {err}");
            Vec::new()
        }
    }
}
