//! English/Arabic interface translation.
//!
//! ARCHITECTURE
//! ============
//! Markup is authored in English. Elements that should follow the visitor's
//! language carry a `data-translate="<key>"` attribute; switching language
//! walks those elements and swaps their text from the static [`Dictionary`].
//! Keys missing from the dictionary leave the authored text untouched, so a
//! partially translated page degrades to English rather than blank labels.

pub mod apply;
pub mod dictionary;


use std::fmt;

use serde::Deserialize;

pub use apply::{TargetKind, TranslationTarget, translate_targets};
pub use dictionary::Dictionary;

use crate::config::UnknownLanguage;
use crate::consts::LANGUAGE_KEY;
use crate::util::storage::KeyValueStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

/// Text direction of the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Language {
    pub const ALL: [Self; 2] = [Self::En, Self::Ar];

    /// ISO 639-1 code, as used in `data-lang`, `<html lang>` and storage.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Uppercase code shown on the language toggle.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Ar => "AR",
        }
    }

    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::En => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The visitor's language choice and how unsupported codes are treated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageState {
    current: Language,
    default: Language,
    unknown: UnknownLanguage,
}

impl LanguageState {
    /// Restore the persisted language. An unreadable stored code always
    /// resolves to `default`: the page has to render in something.
    pub fn load(store: &dyn KeyValueStore, default: Language, unknown: UnknownLanguage) -> Self {
        let current = store
            .get(LANGUAGE_KEY)
            .and_then(|raw| Language::parse(&raw))
            .unwrap_or(default);
        Self { current, default, unknown }
    }

    #[must_use]
    pub fn current(&self) -> Language {
        self.current
    }

    /// Switch to `language` and persist it.
    pub fn set(&mut self, language: Language, store: &dyn KeyValueStore) {
        self.current = language;
        if let Err(err) = store.set(LANGUAGE_KEY, language.code()) {
            log::warn!("language not persisted: {err}");
        }
    }

    /// Resolve a raw code from the page (a `data-lang` value) and switch to it.
    ///
    /// Returns the language now in effect, or `None` when the code was not
    /// recognized and the policy is [`UnknownLanguage::Ignore`].
    pub fn select(&mut self, raw: &str, store: &dyn KeyValueStore) -> Option<Language> {
        let language = match (Language::parse(raw), self.unknown) {
            (Some(language), _) => language,
            (None, UnknownLanguage::Fallback) => {
                log::debug!("unsupported language {raw:?}, falling back to {}", self.default);
                self.default
            }
            (None, UnknownLanguage::Ignore) => {
                log::debug!("unsupported language {raw:?} ignored");
                return None;
            }
        };
        self.set(language, store);
        Some(language)
    }
}
