//! Hamburger-driven mobile navigation.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event};

use super::Context;
use crate::consts::ACTIVE_CLASS;
use crate::state::nav::MobileNav;
use crate::util::dom::{self, Listener, Listeners};
use crate::util::timing::Debouncer;

pub struct NavController {
    _resize: Rc<Debouncer>,
    _listeners: Listeners,
}

/// Shared by every handler that can change the panel.
#[derive(Clone)]
struct Panel {
    ctx: Rc<Context>,
    hamburger: Element,
    panel: Element,
    state: Rc<RefCell<MobileNav>>,
}

impl Panel {
    fn render(&self) {
        let open = self.state.borrow().is_open();
        dom::set_class(&self.hamburger, ACTIVE_CLASS, open);
        dom::set_class(&self.panel, ACTIVE_CLASS, open);
        dom::set_aria(&self.hamburger, "aria-expanded", open);
        dom::lock_body_scroll(&self.ctx.document, open);
    }

    fn close(&self) {
        if self.state.borrow_mut().close() {
            self.render();
        }
    }
}

impl NavController {
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let hamburger: Element = dom::by_id(&ctx.document, "hamburger")?;
        let panel_el: Element = dom::by_id(&ctx.document, "navMobile")?;
        let links = dom::query_all(&panel_el, ".nav-link");

        let panel = Panel {
            ctx: Rc::clone(ctx),
            hamburger: hamburger.clone(),
            panel: panel_el,
            state: Rc::new(RefCell::new(MobileNav::default())),
        };
        dom::set_aria(&hamburger, "aria-expanded", false);

        let resize = Rc::new(Debouncer::new(ctx.config.resize_debounce_ms));
        let mut listeners = Listeners::new();

        listeners.keep({
            let panel = panel.clone();
            Listener::new(&hamburger, "click", move |_: Event| {
                panel.state.borrow_mut().toggle();
                panel.render();
                panel.ctx.refresh_decorations();
            })
        });

        for link in links {
            let panel = panel.clone();
            listeners.keep(Listener::new(&link, "click", move |_: Event| panel.close()));
        }

        listeners.keep({
            let panel = panel.clone();
            Listener::new(&ctx.document, "click", move |event: Event| {
                let inside = dom::event_within(&panel.panel, &event);
                let on_toggle = dom::event_within(&panel.hamburger, &event);
                if panel.state.borrow_mut().document_click(inside, on_toggle) {
                    panel.render();
                }
            })
        });

        listeners.keep({
            let resize = Rc::clone(&resize);
            Listener::new(&ctx.window, "resize", move |_: Event| {
                let panel = panel.clone();
                resize.schedule(move || {
                    let Some(width) = dom::warn_on_err(panel.ctx.window.inner_width(), "innerWidth")
                        .and_then(|w| w.as_f64())
                    else {
                        return;
                    };
                    let breakpoint = panel.ctx.config.mobile_breakpoint_px;
                    if panel.state.borrow_mut().resize(width, breakpoint) {
                        panel.render();
                    }
                });
            })
        });

        Some(Self { _resize: resize, _listeners: listeners })
    }
}
