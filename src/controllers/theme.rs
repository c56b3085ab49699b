//! Light/dark theme on `<html data-theme>`.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Event};

use super::Context;
use crate::consts::THEME_TRANSITION_CLASS;
use crate::state::theme::{Theme, ThemeState};
use crate::util::dom::{self, Listener, Listeners};
use crate::util::timing::Debouncer;

pub struct ThemeController {
    state: Rc<RefCell<ThemeState>>,
    _transition: Rc<Debouncer>,
    _listeners: Listeners,
}

impl ThemeController {
    /// Apply the persisted theme, then wire `#themeToggle` if the page has one.
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let state = ThemeState::load(ctx.store.as_ref(), ctx.config.default_theme);
        apply(&ctx.document, state.current());

        let toggle: Element = dom::by_id(&ctx.document, "themeToggle")?;
        let root = ctx.document.document_element()?;
        dom::set_aria(&toggle, "aria-pressed", state.current() == Theme::Dark);

        let state = Rc::new(RefCell::new(state));
        let transition = Rc::new(Debouncer::new(ctx.config.theme_transition_ms));
        let mut listeners = Listeners::new();

        listeners.keep({
            let state = Rc::clone(&state);
            let transition = Rc::clone(&transition);
            let ctx = Rc::clone(ctx);
            let button = toggle.clone();
            Listener::new(&toggle, "click", move |_: Event| {
                dom::set_class(&root, THEME_TRANSITION_CLASS, true);
                let theme = state.borrow_mut().toggle(ctx.store.as_ref());
                apply(&ctx.document, theme);
                dom::set_aria(&button, "aria-pressed", theme == Theme::Dark);
                log::debug!("theme switched to {theme}");

                let root = root.clone();
                transition.schedule(move || dom::set_class(&root, THEME_TRANSITION_CLASS, false));
                ctx.refresh_decorations();
            })
        });

        Some(Self { state, _transition: transition, _listeners: listeners })
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.state.borrow().current()
    }
}

fn apply(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        dom::set_attr(&root, "data-theme", theme.as_str());
    }
}
