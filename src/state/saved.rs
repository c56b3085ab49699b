//! Cart and favorites lists for the event page.
//!
//! Both lists hold at most one entry per trip id. The cart only grows;
//! favorites toggle membership.

#[cfg(test)]
#[path = "saved_test.rs"]
mod saved_test;

use serde::{Deserialize, Serialize};

use crate::config::TripConfig;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub date: String,
    /// ISO-8601 timestamp of the button press.
    pub added_at: String,
}

impl SavedItem {
    /// Cart entry for the configured trip. `title` is the page's rendered
    /// trip title when there is one.
    #[must_use]
    pub fn cart_entry(trip: &TripConfig, title: Option<String>, added_at: String) -> Self {
        Self {
            id: trip.id.clone(),
            title: title.unwrap_or_else(|| trip.title.clone()),
            price: Some(trip.price.clone()),
            date: trip.date.clone(),
            added_at,
        }
    }

    /// Favorites entry; favorites carry no price.
    #[must_use]
    pub fn favorite_entry(trip: &TripConfig, title: Option<String>, added_at: String) -> Self {
        Self { price: None, ..Self::cart_entry(trip, title, added_at) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Added,
    AlreadyPresent,
    Removed,
}

impl SaveOutcome {
    /// Transient button label.
    #[must_use]
    pub fn feedback(self, list: SavedList) -> &'static str {
        match (self, list) {
            (Self::Added, SavedList::Cart) => "✓ Added to Cart!",
            (Self::Added, SavedList::Favorites) => "✓ Added to Favorites!",
            (Self::AlreadyPresent, _) => "Already in Cart",
            (Self::Removed, _) => "Removed from Favorites",
        }
    }

    /// Only additions get the accent highlight.
    #[must_use]
    pub fn highlights(self) -> bool {
        self == Self::Added
    }

    /// Whether the list changed and must be written back.
    #[must_use]
    pub fn changed(self) -> bool {
        self != Self::AlreadyPresent
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SavedList {
    Cart,
    Favorites,
}

/// Append `item` unless an entry with the same id exists.
pub fn add_to_cart(cart: &mut Vec<SavedItem>, item: SavedItem) -> SaveOutcome {
    if cart.iter().any(|existing| existing.id == item.id) {
        return SaveOutcome::AlreadyPresent;
    }
    cart.push(item);
    SaveOutcome::Added
}

/// Add `item`, or remove the entry with its id if already favorited.
pub fn toggle_favorite(favorites: &mut Vec<SavedItem>, item: SavedItem) -> SaveOutcome {
    if let Some(pos) = favorites.iter().position(|existing| existing.id == item.id) {
        favorites.remove(pos);
        return SaveOutcome::Removed;
    }
    favorites.push(item);
    SaveOutcome::Added
}
