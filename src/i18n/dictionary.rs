//! Static key → localized string tables.
//!
//! The tables ship as `locales/<code>.json` and are compiled into the module.
//! They are never mutated at runtime.

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod dictionary_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::Language;
use crate::error::SiteError;

const EN_JSON: &str = include_str!("../../locales/en.json");
const AR_JSON: &str = include_str!("../../locales/ar.json");

static BUILTIN: LazyLock<Dictionary> = LazyLock::new(|| match Dictionary::from_json(EN_JSON, AR_JSON) {
    Ok(dictionary) => dictionary,
    Err(err) => {
        log::error!("bundled dictionary unreadable, pages stay in authored language: {err}");
        Dictionary::default()
    }
});

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    en: BTreeMap<String, String>,
    ar: BTreeMap<String, String>,
}

impl Dictionary {
    /// The tables bundled with the site.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a dictionary from one flat JSON object per language.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Json`] when either table is not a string map.
    pub fn from_json(en: &str, ar: &str) -> Result<Self, SiteError> {
        Ok(Self { en: serde_json::from_str(en)?, ar: serde_json::from_str(ar)? })
    }

    fn table(&self, language: Language) -> &BTreeMap<String, String> {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }

    /// Localized text for `key`. Empty entries count as missing.
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.table(language)
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Every key `language` defines, in sorted order.
    pub fn keys(&self, language: Language) -> impl Iterator<Item = &str> + '_ {
        self.table(language).keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.table(language).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.en.is_empty() && self.ar.is_empty()
    }

    /// Keys some other language has but `language` lacks or leaves empty.
    #[must_use]
    pub fn missing_keys(&self, language: Language) -> Vec<&str> {
        let mut missing: Vec<&str> = Language::ALL
            .into_iter()
            .filter(|other| *other != language)
            .flat_map(|other| self.keys(other))
            .filter(|key| self.lookup(language, key).is_none())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}
