use super::*;

fn carousel(len: usize) -> CarouselState {
    CarouselState::new(len, 50.0).unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn empty_carousel_is_not_created() {
    assert!(CarouselState::new(0, 50.0).is_none());
}

#[test]
fn new_carousel_starts_idle_at_first_slide() {
    let c = carousel(4);
    assert_eq!(c.index(), 0);
    assert_eq!(c.len(), 4);
    assert!(!c.is_empty());
    assert_eq!(c.drag(), DragPhase::Idle);
}

// =============================================================
// go_to wrapping
// =============================================================

#[test]
fn go_to_minus_one_lands_on_last() {
    let mut c = carousel(5);
    assert_eq!(c.go_to(-1), 4);
}

#[test]
fn go_to_len_lands_on_first() {
    let mut c = carousel(5);
    c.go_to(3);
    assert_eq!(c.go_to(5), 0);
}

#[test]
fn go_to_wraps_one_step_only() {
    let mut c = carousel(5);
    assert_eq!(c.go_to(-3), 4);
    assert_eq!(c.go_to(12), 0);
}

#[test]
fn go_to_in_range_is_direct() {
    let mut c = carousel(5);
    assert_eq!(c.go_to(2), 2);
    assert_eq!(c.index(), 2);
}

#[test]
fn next_and_prev_wrap_around() {
    let mut c = carousel(3);
    assert_eq!(c.prev(), 2);
    assert_eq!(c.next(), 0);
    assert_eq!(c.next(), 1);
}

#[test]
fn single_slide_always_stays_at_zero() {
    let mut c = carousel(1);
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 0);
}

// =============================================================
// Drag gestures
// =============================================================

#[test]
fn track_without_press_is_ignored() {
    let mut c = carousel(3);
    assert!(!c.track(200.0));
    assert_eq!(c.release(), None);
}

#[test]
fn left_swipe_past_threshold_goes_next() {
    let mut c = carousel(3);
    c.press(300.0);
    assert!(c.track(200.0));
    assert_eq!(c.release(), Some(1));
    assert_eq!(c.drag(), DragPhase::Idle);
}

#[test]
fn right_swipe_past_threshold_goes_prev() {
    let mut c = carousel(3);
    c.press(100.0);
    c.track(220.0);
    assert_eq!(c.release(), Some(2));
}

#[test]
fn swipe_at_threshold_does_not_commit() {
    let mut c = carousel(3);
    c.press(100.0);
    c.track(150.0);
    assert_eq!(c.release(), None);
    assert_eq!(c.index(), 0);
}

#[test]
fn drag_delta_tracks_latest_position() {
    let mut c = carousel(3);
    c.press(100.0);
    c.track(40.0);
    c.track(130.0);
    assert_eq!(c.drag(), DragPhase::Dragging { start_x: 100.0, delta: 30.0 });
    assert_eq!(c.release(), None);
}

#[test]
fn release_resets_delta_for_next_gesture() {
    let mut c = carousel(3);
    c.press(0.0);
    c.track(-80.0);
    c.release();
    c.press(10.0);
    assert_eq!(c.drag(), DragPhase::Dragging { start_x: 10.0, delta: 0.0 });
    assert_eq!(c.release(), None);
    assert_eq!(c.index(), 1);
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn arrow_keys_navigate() {
    let mut c = carousel(3);
    assert_eq!(c.key("ArrowRight"), Some(1));
    assert_eq!(c.key("ArrowLeft"), Some(0));
    assert_eq!(c.key("ArrowLeft"), Some(2));
    assert_eq!(c.key("Enter"), None);
}
