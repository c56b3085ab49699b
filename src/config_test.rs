use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_matches_hiking_site() {
    let config = SiteConfig::default();
    assert_eq!(config.default_theme, Theme::Light);
    assert_eq!(config.default_language, Language::En);
    assert_eq!(config.unknown_language, UnknownLanguage::Ignore);
    assert_eq!(config.mobile_breakpoint_px, 768.0);
    assert_eq!(config.swipe_threshold_px, 50.0);
    assert_eq!(config.theme_transition_ms, 300);
    assert_eq!(config.hero_interval_ms, 4000);
    assert_eq!(config.carousels, vec!["joinNextEventCarousel", "ourPreviousHikesCarousel"]);
    assert_eq!(config.event.id, "al-kafrein-hike");
}

#[test]
fn empty_object_yields_defaults() {
    let config = SiteConfig::from_json("{}").unwrap();
    assert_eq!(config, SiteConfig::default());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn cycling_site_overrides_theme_and_language_policy() {
    let raw = r#"{
        "default_theme": "dark",
        "unknown_language": "fallback",
        "carousels": ["rideCarousel"]
    }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.default_theme, Theme::Dark);
    assert_eq!(config.unknown_language, UnknownLanguage::Fallback);
    assert_eq!(config.carousels, vec!["rideCarousel"]);
    assert_eq!(config.hero_interval_ms, DEFAULT_HERO_INTERVAL_MS);
}

#[test]
fn partial_trip_keeps_remaining_defaults() {
    let raw = r#"{ "event": { "id": "dead-sea-ride", "price": "25 JOD" } }"#;
    let config = SiteConfig::from_json(raw).unwrap();
    assert_eq!(config.event.id, "dead-sea-ride");
    assert_eq!(config.event.price, "25 JOD");
    assert_eq!(config.event.date, "FRIDAY, April 18");
}

#[test]
fn arabic_default_language_parses() {
    let config = SiteConfig::from_json(r#"{ "default_language": "ar" }"#).unwrap();
    assert_eq!(config.default_language, Language::Ar);
}

// =============================================================
// Rejections
// =============================================================

#[test]
fn malformed_json_is_a_json_error() {
    let err = SiteConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, SiteError::Json(_)));
}

#[test]
fn unknown_theme_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "default_theme": "sepia" }"#).unwrap_err();
    assert!(matches!(err, SiteError::Json(_)));
}

#[test]
fn zero_hero_interval_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "hero_interval_ms": 0 }"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn negative_swipe_threshold_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "swipe_threshold_px": -5 }"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn zero_breakpoint_is_rejected() {
    let err = SiteConfig::from_json(r#"{ "mobile_breakpoint_px": 0 }"#).unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}
