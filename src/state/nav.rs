//! Disclosure state for the mobile menu and the language dropdown.
//!
//! Each transition returns whether the visible state changed so the DOM
//! binding only touches classes and ARIA attributes when it has to.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Hamburger-driven mobile navigation panel. The body scroll is locked
/// exactly while the panel is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger press. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// A click anywhere in the document. Clicks inside the panel or on the
    /// hamburger itself are handled elsewhere.
    pub fn document_click(&mut self, inside_panel: bool, on_toggle: bool) -> bool {
        if inside_panel || on_toggle {
            return false;
        }
        self.close()
    }

    /// Viewport resize: the panel has no meaning past the desktop breakpoint.
    pub fn resize(&mut self, width: f64, breakpoint: f64) -> bool {
        if width > breakpoint { self.close() } else { false }
    }
}

/// Language selector dropdown, mirrored to `aria-expanded`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dropdown {
    expanded: bool,
}

impl Dropdown {
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.expanded, false)
    }

    pub fn document_click(&mut self, inside: bool) -> bool {
        if inside { false } else { self.close() }
    }

    /// Escape closes an expanded dropdown; the caller then returns focus to
    /// the toggle button.
    pub fn key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }
}
