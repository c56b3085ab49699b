//! Browser behavior for the Valley's Adventure trip pages.
//!
//! This crate is compiled to WebAssembly and loaded by every static page of
//! the site. The markup and styles are hand-written; this module attaches
//! behavior to whatever elements a given page carries: theme toggle, mobile
//! navigation, smooth scrolling, hero rotation, carousels, the gallery
//! lightbox, the English/Arabic translator, cart/favorites buttons and the
//! registration form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure state machines, testable without a browser |
//! | [`i18n`] | Languages, the string dictionary and text substitution |
//! | [`controllers`] | DOM bindings that drive the state machines |
//! | [`util`] | Storage, DOM, timer and icon helpers |
//! | [`site`] | The single entry point that mounts every controller |
//! | [`config`] | Per-site settings read from the page |
//! | [`error`] | Crate error type |
//! | [`consts`] | Storage keys and shared defaults |

pub mod config;
pub mod consts;
pub mod controllers;
pub mod error;
pub mod i18n;
pub mod site;
pub mod state;
pub mod util;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Module entry point: installs the panic hook and logger, then mounts the site.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already installed: {err}").into());
    }
    site::report_errors();
    site::mount_when_ready();
}
