//! Swipeable image carousels.
//!
//! Markup per carousel: a container with a configured id holding
//! `.carousel-img` slides, an optional `.carousel-dots` strip (filled here,
//! one button per slide) and optional `.carousel-prev` / `.carousel-next`
//! buttons.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event, HtmlElement};

use super::Context;
use crate::consts::ACTIVE_CLASS;
use crate::state::carousel::CarouselState;
use crate::util::dom::{self, Listener, Listeners};

pub struct Carousel {
    id: String,
    state: Rc<RefCell<CarouselState>>,
    _listeners: Listeners,
}

#[derive(Clone)]
struct View {
    root: HtmlElement,
    slides: Rc<Vec<Element>>,
    dots: Rc<Vec<Element>>,
    state: Rc<RefCell<CarouselState>>,
}

impl View {
    fn render(&self) {
        let index = self.state.borrow().index();
        for (i, slide) in self.slides.iter().enumerate() {
            dom::set_class(slide, ACTIVE_CLASS, i == index);
        }
        for (i, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE_CLASS, i == index);
            dom::set_aria(dot, "aria-pressed", i == index);
        }
    }

    fn go_to(&self, index: usize) {
        self.state.borrow_mut().go_to(index.try_into().unwrap_or(isize::MAX));
        self.render();
    }

    fn step(&self, forward: bool) {
        {
            let mut state = self.state.borrow_mut();
            if forward { state.next() } else { state.prev() };
        }
        self.render();
    }

    fn press(&self, event: &Event) {
        if let Some(x) = dom::client_x(event) {
            self.state.borrow_mut().press(x);
            dom::set_style(&self.root, "cursor", Some("grabbing"));
        }
    }

    /// Returns whether a drag is in progress.
    fn track(&self, event: &Event) -> bool {
        dom::client_x(event).is_some_and(|x| self.state.borrow_mut().track(x))
    }

    fn release(&self) {
        if !self.state.borrow().is_dragging() {
            return;
        }
        let moved = self.state.borrow_mut().release();
        dom::set_style(&self.root, "cursor", Some("grab"));
        if moved.is_some() {
            self.render();
        }
    }
}

impl Carousel {
    /// Enhance the carousel with element id `id`. Carousels without slides
    /// are left alone.
    pub fn attach(ctx: &Rc<Context>, id: &str) -> Option<Self> {
        let root: HtmlElement = dom::by_id(&ctx.document, id)?;
        let slides = dom::query_all(&root, ".carousel-img");
        let state = CarouselState::new(slides.len(), ctx.config.swipe_threshold_px)?;
        let state = Rc::new(RefCell::new(state));

        let dots = dom::query::<Element>(&root, ".carousel-dots")
            .map(|strip| build_dots(ctx, &strip, slides.len()))
            .unwrap_or_default();

        let view = View { root: root.clone(), slides: Rc::new(slides), dots: Rc::new(dots), state: Rc::clone(&state) };
        view.render();
        dom::set_style(&root, "cursor", Some("grab"));

        let mut listeners = Listeners::new();

        for (index, dot) in view.dots.iter().enumerate() {
            let view = view.clone();
            listeners.keep(Listener::new(dot, "click", move |_: Event| view.go_to(index)));
        }

        for (selector, forward) in [(".carousel-prev", false), (".carousel-next", true)] {
            let Some(button) = dom::query::<Element>(&root, selector) else {
                continue;
            };
            let view = view.clone();
            listeners.keep(Listener::new(&button, "click", move |_: Event| view.step(forward)));
        }

        listeners.keep({
            let view = view.clone();
            Listener::passive(&root, "touchstart", move |event: Event| view.press(&event))
        });
        listeners.keep({
            let view = view.clone();
            Listener::active(&root, "touchmove", move |event: Event| {
                if view.track(&event) {
                    event.prevent_default();
                }
            })
        });
        listeners.keep({
            let view = view.clone();
            Listener::new(&root, "mousedown", move |event: Event| {
                event.prevent_default();
                view.press(&event);
            })
        });
        listeners.keep({
            let view = view.clone();
            Listener::new(&root, "mousemove", move |event: Event| {
                view.track(&event);
            })
        });
        for release in ["touchend", "mouseup", "mouseleave"] {
            let view = view.clone();
            listeners.keep(Listener::new(&root, release, move |_: Event| view.release()));
        }
        listeners.keep(Listener::new(&root, "keydown", move |event: Event| {
            let Some(key) = dom::key_of(&event) else {
                return;
            };
            let moved = view.state.borrow_mut().key(&key);
            if moved.is_some() {
                view.render();
            }
        }));

        log::debug!("carousel #{id}: {} slides", state.borrow().len());
        Some(Self { id: id.to_owned(), state, _listeners: listeners })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.state.borrow().index()
    }
}

/// One `button.carousel-dot` per slide, appended to `strip`.
fn build_dots(ctx: &Context, strip: &Element, count: usize) -> Vec<Element> {
    (0..count)
        .filter_map(|i| {
            let dot = dom::warn_on_err(ctx.document.create_element("button"), "carousel dot")?;
            dot.set_class_name("carousel-dot");
            dom::set_attr(&dot, "type", "button");
            dom::set_attr(&dot, "aria-label", &format!("Go to image {}", i + 1));
            dom::warn_on_err(strip.append_child(&dot), "carousel dot")?;
            Some(dot)
        })
        .collect()
}
