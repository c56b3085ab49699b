//! Shared constants for the site crate.

// ── Storage keys ────────────────────────────────────────────────

/// Persisted theme (`light` | `dark`).
pub const THEME_KEY: &str = "theme";

/// Persisted interface language (`en` | `ar`).
pub const LANGUAGE_KEY: &str = "language";

/// JSON list of trips added to the cart.
pub const CART_KEY: &str = "cart";

/// JSON list of favorited trips.
pub const FAVORITES_KEY: &str = "favorites";

/// JSON map of the last accepted registration form.
pub const REGISTRATION_KEY: &str = "registrationData";

// ── Page configuration ──────────────────────────────────────────

/// Id of the optional `<script type="application/json">` holding [`crate::config::SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Attribute naming the dictionary key of a translatable element.
pub const TRANSLATE_ATTR: &str = "data-translate";

/// Attribute carrying the language code on dropdown options.
pub const LANG_ATTR: &str = "data-lang";

// ── Classes ─────────────────────────────────────────────────────

/// Generic "on" class used by menus, slides, dots and the lightbox.
pub const ACTIVE_CLASS: &str = "active";

/// Transient marker present on `<html>` while the theme changes.
pub const THEME_TRANSITION_CLASS: &str = "theme-transitioning";

/// Marker for an invalid form field.
pub const ERROR_CLASS: &str = "error";

/// Body class set while the Arabic layout is active.
pub const RTL_CLASS: &str = "rtl";
