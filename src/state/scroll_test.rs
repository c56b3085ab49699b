use super::*;

#[test]
fn placeholder_hrefs_are_ignored() {
    assert_eq!(anchor_target(""), None);
    assert_eq!(anchor_target("#"), None);
    assert_eq!(anchor_target("#!"), None);
}

#[test]
fn fragment_href_yields_id() {
    assert_eq!(anchor_target("#about"), Some("about"));
    assert_eq!(anchor_target("#registration-form"), Some("registration-form"));
}

#[test]
fn non_fragment_href_is_ignored() {
    assert_eq!(anchor_target("event.html#gallery"), None);
    assert_eq!(anchor_target("https://example.com"), None);
}

#[test]
fn scroll_top_subtracts_header_height() {
    assert_eq!(scroll_top(1200.0, 80.0), 1120.0);
    assert_eq!(scroll_top(40.0, 80.0), -40.0);
}

#[test]
fn header_elevates_strictly_past_offset() {
    assert!(!header_elevated(0.0, 50.0));
    assert!(!header_elevated(50.0, 50.0));
    assert!(header_elevated(51.0, 50.0));
}
