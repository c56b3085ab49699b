//! Gallery lightbox: which image is shown and whether the modal is open.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// What a key press did to an open lightbox.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxKey {
    Closed,
    Moved(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxState {
    len: usize,
    index: usize,
    open: bool,
}

impl LightboxState {
    /// `None` for an empty gallery.
    #[must_use]
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, index: 0, open: false })
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Prev/next controls are hidden for a single-image gallery.
    #[must_use]
    pub fn shows_navigation(&self) -> bool {
        self.len > 1
    }

    /// Open on image `index`. Out-of-range indices are refused.
    pub fn open_at(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }

    /// Keyboard handling while the modal is open. Closed lightboxes ignore keys.
    pub fn key(&mut self, key: &str) -> Option<LightboxKey> {
        if !self.open {
            return None;
        }
        match key {
            "Escape" => {
                self.close();
                Some(LightboxKey::Closed)
            }
            "ArrowLeft" => Some(LightboxKey::Moved(self.prev())),
            "ArrowRight" => Some(LightboxKey::Moved(self.next())),
            _ => None,
        }
    }
}
