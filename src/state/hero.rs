//! Hero background rotation.
//!
//! Every tick a random image becomes active (it may be the one already
//! showing). Ticks are ignored while the pointer rests on the hero.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

/// Result of a rotation tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeroStep {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroRotation {
    len: usize,
    index: usize,
    paused: bool,
}

impl HeroRotation {
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0, paused: false })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advance using `roll`, a uniform sample from `[0, 1)`.
    pub fn tick(&mut self, roll: f64) -> Option<HeroStep> {
        if self.paused {
            return None;
        }
        let from = self.index;
        self.index = pick(roll, self.len);
        Some(HeroStep { from, to: self.index })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn pick(roll: f64, len: usize) -> usize {
    let roll = if roll.is_finite() { roll.clamp(0.0, 1.0) } else { 0.0 };
    ((roll * len as f64).floor() as usize).min(len - 1)
}
