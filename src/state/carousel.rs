//! Swipeable image carousel.
//!
//! One [`CarouselState`] per carousel element. The slide set is fixed at
//! init. A drag starts on pointer/touch down, accumulates horizontal travel,
//! and on release commits at most one slide step when the travel exceeds the
//! swipe threshold.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Gesture phase between press and release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        /// Pointer x at press.
        start_x: f64,
        /// Signed travel since press; positive means the pointer moved right.
        delta: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    len: usize,
    index: usize,
    drag: DragPhase,
    threshold: f64,
}

impl CarouselState {
    /// `None` when there are no slides; such a carousel is left alone.
    #[must_use]
    pub fn new(len: usize, threshold: f64) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0, drag: DragPhase::Idle, threshold })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn drag(&self) -> DragPhase {
        self.drag
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragPhase::Dragging { .. })
    }

    /// Jump to `target`. Out-of-range targets wrap by a single step only:
    /// anything below zero lands on the last slide, anything past the end on
    /// the first.
    pub fn go_to(&mut self, target: isize) -> usize {
        self.index = match usize::try_from(target) {
            Err(_) => self.len - 1,
            Ok(i) if i >= self.len => 0,
            Ok(i) => i,
        };
        self.index
    }

    pub fn next(&mut self) -> usize {
        self.go_to(self.signed_index() + 1)
    }

    pub fn prev(&mut self) -> usize {
        self.go_to(self.signed_index() - 1)
    }

    fn signed_index(&self) -> isize {
        isize::try_from(self.index).unwrap_or(isize::MAX)
    }

    /// Begin a drag at pointer x.
    pub fn press(&mut self, x: f64) {
        self.drag = DragPhase::Dragging { start_x: x, delta: 0.0 };
    }

    /// Track pointer movement. Returns `true` while a drag is in progress, in
    /// which case touch scrolling should be suppressed.
    pub fn track(&mut self, x: f64) -> bool {
        match &mut self.drag {
            DragPhase::Dragging { start_x, delta } => {
                *delta = x - *start_x;
                true
            }
            DragPhase::Idle => false,
        }
    }

    /// End the drag. Travel beyond the threshold to the right shows the
    /// previous slide, to the left the next one.
    ///
    /// Returns the new index when the slide changed.
    pub fn release(&mut self) -> Option<usize> {
        let DragPhase::Dragging { delta, .. } = std::mem::take(&mut self.drag) else {
            return None;
        };
        if delta.abs() <= self.threshold {
            return None;
        }
        Some(if delta > 0.0 { self.prev() } else { self.next() })
    }

    /// Arrow-key navigation. Returns the new index for handled keys.
    pub fn key(&mut self, key: &str) -> Option<usize> {
        match key {
            "ArrowLeft" => Some(self.prev()),
            "ArrowRight" => Some(self.next()),
            _ => None,
        }
    }
}
