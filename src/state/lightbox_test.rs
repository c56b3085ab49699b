use super::*;

#[test]
fn empty_gallery_has_no_lightbox() {
    assert!(LightboxState::new(0).is_none());
}

#[test]
fn opens_at_requested_image() {
    let mut lb = LightboxState::new(4).unwrap();
    assert!(!lb.is_open());
    assert!(lb.open_at(2));
    assert!(lb.is_open());
    assert_eq!(lb.index(), 2);
}

#[test]
fn open_at_out_of_range_is_refused() {
    let mut lb = LightboxState::new(2).unwrap();
    assert!(!lb.open_at(2));
    assert!(!lb.is_open());
}

#[test]
fn prev_from_first_wraps_to_last() {
    let mut lb = LightboxState::new(5).unwrap();
    lb.open_at(0);
    assert_eq!(lb.prev(), 4);
}

#[test]
fn next_from_last_wraps_to_first() {
    let mut lb = LightboxState::new(5).unwrap();
    lb.open_at(4);
    assert_eq!(lb.next(), 0);
}

#[test]
fn navigation_hidden_for_single_image() {
    assert!(!LightboxState::new(1).unwrap().shows_navigation());
    assert!(LightboxState::new(2).unwrap().shows_navigation());
}

#[test]
fn escape_closes_open_lightbox() {
    let mut lb = LightboxState::new(3).unwrap();
    lb.open_at(1);
    assert_eq!(lb.key("Escape"), Some(LightboxKey::Closed));
    assert!(!lb.is_open());
}

#[test]
fn arrow_keys_move_with_wraparound() {
    let mut lb = LightboxState::new(3).unwrap();
    lb.open_at(0);
    assert_eq!(lb.key("ArrowLeft"), Some(LightboxKey::Moved(2)));
    assert_eq!(lb.key("ArrowRight"), Some(LightboxKey::Moved(0)));
    assert_eq!(lb.key("Tab"), None);
}

#[test]
fn keys_ignored_while_closed() {
    let mut lb = LightboxState::new(3).unwrap();
    assert_eq!(lb.key("ArrowRight"), None);
    assert_eq!(lb.index(), 0);
}

#[test]
fn reopening_keeps_requested_index() {
    let mut lb = LightboxState::new(3).unwrap();
    lb.open_at(2);
    lb.close();
    lb.open_at(1);
    assert_eq!(lb.index(), 1);
}
