//! Light/dark theme preference.
//!
//! The preference is read once at load from storage (or the site default) and
//! changes only through an explicit toggle, which writes it straight back.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use serde::Deserialize;

use crate::consts::THEME_KEY;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to `data-theme` and to storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current theme plus its persistence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    /// Restore the persisted theme, or `default` when nothing valid is stored.
    pub fn load(store: &dyn KeyValueStore, default: Theme) -> Self {
        let current = store
            .get(THEME_KEY)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or(default);
        Self { current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist it. A failed write still flips the page.
    pub fn toggle(&mut self, store: &dyn KeyValueStore) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = store.set(THEME_KEY, self.current.as_str()) {
            log::warn!("theme not persisted: {err}");
        }
        self.current
    }
}
