//! In-page anchor scrolling and header elevation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id an in-page link points at.
///
/// `""`, `"#"` and `"#!"` are placeholders used by no-op buttons and yield
/// `None`, as does anything that is not a fragment link.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    match href {
        "" | "#" | "#!" => None,
        _ => href.strip_prefix('#').filter(|id| !id.is_empty()),
    }
}

/// Document y to scroll to so the target sits just below the fixed header.
#[must_use]
pub fn scroll_top(target_offset_top: f64, header_height: f64) -> f64 {
    target_offset_top - header_height
}

/// Whether the header should carry its drop shadow at this scroll position.
#[must_use]
pub fn header_elevated(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}
