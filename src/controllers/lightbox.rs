//! Modal viewer for `.gallery-img[data-lightbox]` images.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event, HtmlElement, HtmlImageElement};

use super::Context;
use crate::consts::ACTIVE_CLASS;
use crate::state::lightbox::{LightboxKey, LightboxState};
use crate::util::dom::{self, Listener, Listeners};

pub struct LightboxController {
    _listeners: Listeners,
}

#[derive(Clone)]
struct Modal {
    ctx: Rc<Context>,
    modal: Element,
    image: Option<HtmlImageElement>,
    prev: Option<HtmlElement>,
    next: Option<HtmlElement>,
    sources: Rc<Vec<HtmlImageElement>>,
    state: Rc<RefCell<LightboxState>>,
}

impl Modal {
    fn show(&self, index: usize) {
        if let (Some(image), Some(source)) = (&self.image, self.sources.get(index)) {
            image.set_src(&source.src());
            image.set_alt(&source.alt());
        }
        let display = if self.state.borrow().shows_navigation() { "block" } else { "none" };
        for button in [&self.prev, &self.next].into_iter().flatten() {
            dom::set_style(button, "display", Some(display));
        }
    }

    fn open(&self, index: usize) {
        if !self.state.borrow_mut().open_at(index) {
            return;
        }
        self.show(index);
        dom::set_class(&self.modal, ACTIVE_CLASS, true);
        dom::lock_body_scroll(&self.ctx.document, true);
    }

    fn close(&self) {
        self.state.borrow_mut().close();
        dom::set_class(&self.modal, ACTIVE_CLASS, false);
        dom::lock_body_scroll(&self.ctx.document, false);
    }

    fn step(&self, forward: bool) {
        let index = {
            let mut state = self.state.borrow_mut();
            if forward { state.next() } else { state.prev() }
        };
        self.show(index);
    }
}

impl LightboxController {
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let modal_el: Element = dom::by_id(&ctx.document, "lightboxModal")?;
        let sources: Vec<HtmlImageElement> =
            dom::cast_all(dom::document_query_all(&ctx.document, ".gallery-img[data-lightbox]"));
        let state = LightboxState::new(sources.len())?;

        let modal = Modal {
            ctx: Rc::clone(ctx),
            modal: modal_el.clone(),
            image: dom::by_id(&ctx.document, "lightboxImage"),
            prev: dom::by_id(&ctx.document, "lightboxPrev"),
            next: dom::by_id(&ctx.document, "lightboxNext"),
            sources: Rc::new(sources),
            state: Rc::new(RefCell::new(state)),
        };
        let mut listeners = Listeners::new();

        for (index, source) in modal.sources.iter().enumerate() {
            dom::set_attr(source, "tabindex", "0");
            listeners.keep({
                let modal = modal.clone();
                Listener::new(source, "click", move |_: Event| modal.open(index))
            });
            listeners.keep({
                let modal = modal.clone();
                Listener::new(source, "keydown", move |event: Event| {
                    if matches!(dom::key_of(&event).as_deref(), Some("Enter" | " ")) {
                        event.prevent_default();
                        modal.open(index);
                    }
                })
            });
        }

        if let Some(close) = dom::by_id::<Element>(&ctx.document, "lightboxClose") {
            let modal = modal.clone();
            listeners.keep(Listener::new(&close, "click", move |_: Event| modal.close()));
        }

        for (button, forward) in [(modal.prev.clone(), false), (modal.next.clone(), true)] {
            let Some(button) = button else {
                continue;
            };
            let modal = modal.clone();
            listeners.keep(Listener::new(&button, "click", move |event: Event| {
                event.stop_propagation();
                modal.step(forward);
            }));
        }

        listeners.keep({
            let modal = modal.clone();
            Listener::new(&modal_el, "click", move |event: Event| {
                if dom::event_targets(&modal.modal, &event) {
                    modal.close();
                }
            })
        });

        listeners.keep(Listener::new(&ctx.document, "keydown", move |event: Event| {
            let Some(key) = dom::key_of(&event) else {
                return;
            };
            let outcome = modal.state.borrow_mut().key(&key);
            match outcome {
                Some(LightboxKey::Closed) => modal.close(),
                Some(LightboxKey::Moved(index)) => modal.show(index),
                None => {}
            }
        }));

        Some(Self { _listeners: listeners })
    }
}
