//! Per-site settings.
//!
//! The trip pages are deployed as several near-identical sites (hiking,
//! cycling) that differ in a handful of defaults. Each page may embed a
//! `<script type="application/json" id="site-config">` block; every field is
//! optional and falls back to [`SiteConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use web_sys::Document;

use crate::consts::CONFIG_ELEMENT_ID;
use crate::error::SiteError;
use crate::i18n::Language;
use crate::state::theme::Theme;

pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;
pub const DEFAULT_SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_THEME_TRANSITION_MS: u32 = 300;
pub const DEFAULT_HERO_INTERVAL_MS: u32 = 4000;
pub const DEFAULT_FEEDBACK_MS: u32 = 2000;

/// What a language selector does with a code the site does not support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownLanguage {
    /// Leave the current language in place.
    #[default]
    Ignore,
    /// Switch to the configured default language.
    Fallback,
}

/// The bookable trip advertised on the event page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TripConfig {
    pub id: String,
    /// Used when the page has no `.event-hero-title` element.
    pub title: String,
    pub price: String,
    pub date: String,
}

impl Default for TripConfig {
    fn default() -> Self {
        Self {
            id: "al-kafrein-hike".to_owned(),
            title: "Wadi Al-Kafrein Hike".to_owned(),
            price: "18 JOD".to_owned(),
            date: "FRIDAY, April 18".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub default_theme: Theme,
    pub default_language: Language,
    pub unknown_language: UnknownLanguage,
    pub mobile_breakpoint_px: f64,
    pub swipe_threshold_px: f64,
    pub theme_transition_ms: u32,
    pub hero_interval_ms: u32,
    pub feedback_ms: u32,
    pub header_shadow_offset_px: f64,
    pub resize_debounce_ms: u32,
    pub scroll_throttle_ms: u32,
    pub icon_retry_ms: u32,
    pub icon_retry_limit: u32,
    /// Name of the optional icon library global (e.g. `lucide`).
    pub icon_global: String,
    /// Element ids of the carousels to enhance.
    pub carousels: Vec<String>,
    pub event: TripConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_theme: Theme::Light,
            default_language: Language::En,
            unknown_language: UnknownLanguage::Ignore,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
            swipe_threshold_px: DEFAULT_SWIPE_THRESHOLD_PX,
            theme_transition_ms: DEFAULT_THEME_TRANSITION_MS,
            hero_interval_ms: DEFAULT_HERO_INTERVAL_MS,
            feedback_ms: DEFAULT_FEEDBACK_MS,
            header_shadow_offset_px: 50.0,
            resize_debounce_ms: 150,
            scroll_throttle_ms: 100,
            icon_retry_ms: 100,
            icon_retry_limit: 20,
            icon_global: "lucide".to_owned(),
            carousels: vec!["joinNextEventCarousel".to_owned(), "ourPreviousHikesCarousel".to_owned()],
            event: TripConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Json`] for malformed JSON and
    /// [`SiteError::Config`] for values no page could work with.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the config block from the page, falling back to defaults.
    pub fn from_document(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), SiteError> {
        if !(self.mobile_breakpoint_px.is_finite() && self.mobile_breakpoint_px > 0.0) {
            return Err(SiteError::Config("mobile_breakpoint_px must be positive".into()));
        }
        if !(self.swipe_threshold_px.is_finite() && self.swipe_threshold_px >= 0.0) {
            return Err(SiteError::Config("swipe_threshold_px must not be negative".into()));
        }
        if self.hero_interval_ms == 0 {
            return Err(SiteError::Config("hero_interval_ms must be positive".into()));
        }
        if self.icon_retry_ms == 0 && self.icon_retry_limit > 0 {
            return Err(SiteError::Config("icon_retry_ms must be positive when retries are enabled".into()));
        }
        Ok(())
    }
}
