//! Hero background rotation and text entrance animation.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Context;
use crate::consts::ACTIVE_CLASS;
use crate::error::SiteError;
use crate::state::hero::HeroRotation;
use crate::util::dom::{self, Listener, Listeners};

const ENTRANCE_THRESHOLD: f64 = 0.1;

/// Cycles `.hero-bg-img` images on a timer, paused while hovered.
pub struct HeroSlider {
    timer: Rc<RefCell<Option<Interval>>>,
    _listeners: Listeners,
}

#[derive(Clone)]
struct Slides {
    images: Rc<Vec<Element>>,
    rotation: Rc<RefCell<HeroRotation>>,
    interval_ms: u32,
}

impl Slides {
    fn tick(&self) {
        let step = self.rotation.borrow_mut().tick(js_sys::Math::random());
        let Some(step) = step else {
            return;
        };
        if let Some(from) = self.images.get(step.from) {
            dom::set_class(from, ACTIVE_CLASS, false);
        }
        if let Some(to) = self.images.get(step.to) {
            dom::set_class(to, ACTIVE_CLASS, true);
        }
    }

    /// A fresh interval. Storing it in the slot drops (and clears) any
    /// previous one.
    fn start(&self, slot: &RefCell<Option<Interval>>) {
        let slides = self.clone();
        *slot.borrow_mut() = Some(Interval::new(self.interval_ms, move || slides.tick()));
    }
}

impl HeroSlider {
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let images = dom::document_query_all(&ctx.document, ".hero-bg-img");
        let rotation = HeroRotation::new(images.len())?;
        for (i, image) in images.iter().enumerate() {
            dom::set_class(image, ACTIVE_CLASS, i == rotation.index());
        }

        let slides = Slides {
            images: Rc::new(images),
            rotation: Rc::new(RefCell::new(rotation)),
            interval_ms: ctx.config.hero_interval_ms,
        };
        let timer = Rc::new(RefCell::new(None));
        slides.start(&timer);

        let mut listeners = Listeners::new();
        let hero = slides
            .images
            .first()
            .and_then(|img| dom::warn_on_err(img.closest(".hero"), ".hero").flatten());
        if let Some(hero) = hero {
            listeners.keep({
                let slides = slides.clone();
                let timer = Rc::clone(&timer);
                Listener::new(&hero, "mouseenter", move |_: Event| {
                    slides.rotation.borrow_mut().pause();
                    *timer.borrow_mut() = None;
                })
            });
            listeners.keep({
                let timer = Rc::clone(&timer);
                Listener::new(&hero, "mouseleave", move |_: Event| {
                    if !slides.rotation.borrow().is_paused() {
                        return;
                    }
                    slides.rotation.borrow_mut().resume();
                    slides.start(&timer);
                })
            });
        }

        Some(Self { timer, _listeners: listeners })
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.timer.borrow().is_some()
    }
}

/// Starts each `.hero-line` animation once it scrolls into view.
pub struct HeroEntrance {
    observer: Option<IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
}

impl HeroEntrance {
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let lines: Vec<HtmlElement> = dom::cast_all(dom::document_query_all(&ctx.document, ".hero-line"));
        if lines.is_empty() {
            return None;
        }

        if prefers_reduced_motion(ctx) {
            for line in &lines {
                dom::set_style(line, "opacity", Some("1"));
                dom::set_style(line, "transform", Some("translateY(0)"));
            }
            return Some(Self { observer: None, _callback: None });
        }

        match observe(&lines) {
            Ok((observer, callback)) => Some(Self { observer: Some(observer), _callback: Some(callback) }),
            Err(err) => {
                log::warn!("hero entrance observer unavailable: {err}");
                None
            }
        }
    }
}

impl Drop for HeroEntrance {
    fn drop(&mut self) {
        if let Some(observer) = &self.observer {
            observer.disconnect();
        }
    }
}

fn prefers_reduced_motion(ctx: &Context) -> bool {
    dom::warn_on_err(ctx.window.match_media("(prefers-reduced-motion: reduce)"), "matchMedia")
        .flatten()
        .is_some_and(|query| query.matches())
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn observe(lines: &[HtmlElement]) -> Result<(IntersectionObserver, ObserverCallback), SiteError> {
    let callback: ObserverCallback = Closure::wrap(Box::new(|entries: Array, _: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            if !entry.is_intersecting() {
                continue;
            }
            if let Some(target) = entry.target().dyn_ref::<HtmlElement>() {
                dom::set_style(target, "animation-play-state", Some("running"));
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let options = IntersectionObserverInit::new();
    options.set_threshold(&ENTRANCE_THRESHOLD.into());
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for line in lines {
        observer.observe(line);
    }
    Ok((observer, callback))
}
