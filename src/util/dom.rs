//! Element lookup, attribute/class writes and owned event listeners.
//!
//! Every controller guards on the elements it needs; these helpers turn the
//! usual `Result<Option<_>, JsValue>` layers into plain `Option`s and log
//! failed writes instead of surfacing them.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, MouseEvent, Node,
    NodeList, TouchEvent, Window,
};

use crate::error::{SiteError, describe_js};

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// Log a failed DOM call at `warn` and continue.
pub fn warn_on_err<T>(result: Result<T, JsValue>, context: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{context}: {}", describe_js(&err));
            None
        }
    }
}

/// Checked downcast between JS interfaces.
pub fn cast<T: JsCast>(value: impl JsCast) -> Option<T> {
    match value.dyn_into::<T>() {
        Ok(typed) => Some(typed),
        Err(_) => None,
    }
}

/// Element by id, cast to the expected interface.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id).and_then(cast::<T>)
}

/// First descendant of `root` matching `selector`.
pub fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    warn_on_err(root.query_selector(selector), selector)
        .flatten()
        .and_then(cast::<T>)
}

/// All descendants of `root` matching `selector`.
pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    collect(root.query_selector_all(selector), selector)
}

/// All elements in `document` matching `selector`.
pub fn document_query_all(document: &Document, selector: &str) -> Vec<Element> {
    collect(document.query_selector_all(selector), selector)
}

fn collect(list: Result<NodeList, JsValue>, selector: &str) -> Vec<Element> {
    let Some(list) = warn_on_err(list, selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(cast::<Element>)
        .collect()
}

/// Typed view of every element in `elements`, skipping mismatches.
pub fn cast_all<T: JsCast>(elements: Vec<Element>) -> Vec<T> {
    elements.into_iter().filter_map(cast::<T>).collect()
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    warn_on_err(element.class_list().toggle_with_force(class, on), class);
}

pub fn set_attr(element: &Element, name: &str, value: &str) {
    warn_on_err(element.set_attribute(name, value), name);
}

pub fn remove_attr(element: &Element, name: &str) {
    warn_on_err(element.remove_attribute(name), name);
}

/// Mirror a boolean into an ARIA state attribute.
pub fn set_aria(element: &Element, name: &str, on: bool) {
    set_attr(element, name, if on { "true" } else { "false" });
}

/// Set (`Some`) or clear (`None`) an inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: Option<&str>) {
    let style = element.style();
    match value {
        Some(value) => {
            warn_on_err(style.set_property(property, value), property);
        }
        None => {
            warn_on_err(style.remove_property(property), property);
        }
    }
}

/// Suppress (or restore) page scrolling behind an overlay.
pub fn lock_body_scroll(document: &Document, locked: bool) {
    if let Some(body) = document.body() {
        set_style(&body, "overflow", locked.then_some("hidden"));
    }
}

/// Whether the event originated inside `container`.
pub fn event_within(container: &Element, event: &Event) -> bool {
    event
        .target()
        .and_then(cast::<Node>)
        .is_some_and(|node| container.contains(Some(&node)))
}

/// Whether the event target is exactly `element`.
pub fn event_targets(element: &Element, event: &Event) -> bool {
    event
        .target()
        .is_some_and(|target| target.loose_eq(element.as_ref()))
}

pub fn key_of(event: &Event) -> Option<String> {
    event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key)
}

/// Horizontal pointer position of a mouse or single-touch event. `touchend`
/// carries no active touches and yields `None`.
pub fn client_x(event: &Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(f64::from(mouse.client_x()));
    }
    event
        .dyn_ref::<TouchEvent>()
        .and_then(|touch| touch.touches().get(0))
        .map(|t| f64::from(t.client_x()))
}

/// An event listener that stays attached for as long as this value lives.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach with the browser's default options.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Js`] when the browser rejects the registration.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SiteError> {
        Self::attach(target, event, None, handler)
    }

    /// Attach a listener that promises never to call `preventDefault`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Js`] when the browser rejects the registration.
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SiteError> {
        Self::attach(target, event, Some(true), handler)
    }

    /// Attach a listener that may call `preventDefault` even where the
    /// browser would default to passive (touch scrolling).
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Js`] when the browser rejects the registration.
    pub fn active(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SiteError> {
        Self::attach(target, event, Some(false), handler)
    }

    fn attach(
        target: &EventTarget,
        event: &'static str,
        passive: Option<bool>,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, SiteError> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let function: &js_sys::Function = callback.as_ref().unchecked_ref();
        match passive {
            Some(passive) => {
                let options = AddEventListenerOptions::new();
                options.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(event, function, &options)?;
            }
            None => target.add_event_listener_with_callback(event, function)?,
        }
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        warn_on_err(
            self.target
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()),
            self.event,
        );
    }
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener").field("event", &self.event).finish_non_exhaustive()
    }
}

/// Listeners owned by one controller.
#[derive(Debug, Default)]
pub struct Listeners(Vec<Listener>);

impl Listeners {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a freshly attached listener, logging registration failures.
    pub fn keep(&mut self, listener: Result<Listener, SiteError>) {
        match listener {
            Ok(listener) => self.0.push(listener),
            Err(err) => log::warn!("listener not attached: {err}"),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
