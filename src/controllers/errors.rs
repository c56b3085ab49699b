//! Window-level error reporting.
//!
//! Uncaught script errors and unhandled promise rejections are logged and
//! otherwise ignored; visitors never see them.

use web_sys::{ErrorEvent, Event, PromiseRejectionEvent};
use wasm_bindgen::JsCast;

use crate::error::describe_js;
use crate::util::dom::{Listener, Listeners};

pub struct ErrorReporter {
    _listeners: Listeners,
}

impl ErrorReporter {
    pub fn attach(window: &web_sys::Window) -> Self {
        let mut listeners = Listeners::new();
        listeners.keep(Listener::passive(window, "error", |event: Event| {
            match event.dyn_ref::<ErrorEvent>() {
                Some(error) => log::error!(
                    "uncaught error: {} ({}:{}:{})",
                    error.message(),
                    error.filename(),
                    error.lineno(),
                    error.colno()
                ),
                None => log::error!("uncaught error event: {}", event.type_()),
            }
        }));
        listeners.keep(Listener::passive(window, "unhandledrejection", |event: Event| {
            let reason = event
                .dyn_ref::<PromiseRejectionEvent>()
                .map_or_else(|| "unknown reason".to_owned(), |rejection| describe_js(&rejection.reason()));
            log::error!("unhandled promise rejection: {reason}");
        }));
        Self { _listeners: listeners }
    }
}
