use super::*;

#[test]
fn no_images_no_rotation() {
    assert!(HeroRotation::new(0).is_none());
}

#[test]
fn starts_on_first_image() {
    let hero = HeroRotation::new(3).unwrap();
    assert_eq!(hero.index(), 0);
    assert!(!hero.is_paused());
}

#[test]
fn tick_maps_roll_onto_index() {
    let mut hero = HeroRotation::new(4).unwrap();
    assert_eq!(hero.tick(0.74), Some(HeroStep { from: 0, to: 2 }));
    assert_eq!(hero.tick(0.0), Some(HeroStep { from: 2, to: 0 }));
    assert_eq!(hero.tick(0.999), Some(HeroStep { from: 0, to: 3 }));
}

#[test]
fn tick_may_repeat_current_image() {
    let mut hero = HeroRotation::new(2).unwrap();
    assert_eq!(hero.tick(0.1), Some(HeroStep { from: 0, to: 0 }));
}

#[test]
fn out_of_range_rolls_stay_in_bounds() {
    let mut hero = HeroRotation::new(3).unwrap();
    assert_eq!(hero.tick(1.0).map(|s| s.to), Some(2));
    assert_eq!(hero.tick(-4.0).map(|s| s.to), Some(0));
    assert_eq!(hero.tick(f64::NAN).map(|s| s.to), Some(0));
}

#[test]
fn paused_rotation_ignores_ticks() {
    let mut hero = HeroRotation::new(3).unwrap();
    hero.pause();
    assert_eq!(hero.tick(0.9), None);
    assert_eq!(hero.index(), 0);
    hero.resume();
    assert_eq!(hero.tick(0.9).map(|s| s.to), Some(2));
}
