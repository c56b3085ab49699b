//! Optional icon library refresh.
//!
//! Pages may load an icon script (Lucide by default) that replaces
//! `<i data-lucide>` placeholders with SVGs. It can finish loading after this
//! module starts, so a refresh retries on a short timer until the global
//! appears or the retry limit runs out.

use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::config::SiteConfig;
use crate::error::SiteError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconRefresher {
    global: String,
    retry_ms: u32,
    retry_limit: u32,
}

impl IconRefresher {
    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            global: config.icon_global.clone(),
            retry_ms: config.icon_retry_ms,
            retry_limit: config.icon_retry_limit,
        }
    }

    /// Render icons now, or keep retrying in the background.
    pub fn refresh(&self) {
        if self.global.is_empty() {
            return;
        }
        self.attempt(self.retry_limit);
    }

    fn attempt(&self, retries_left: u32) {
        match render(&self.global) {
            Ok(true) => {}
            Ok(false) if retries_left > 0 => {
                let next = self.clone();
                Timeout::new(self.retry_ms, move || next.attempt(retries_left - 1)).forget();
            }
            Ok(false) => log::debug!("icon library `{}` never loaded", self.global),
            Err(err) => log::warn!("icon refresh failed: {err}"),
        }
    }
}

/// Call `<global>.createIcons()`. `Ok(false)` means the library is not there yet.
fn render(global: &str) -> Result<bool, SiteError> {
    let library = Reflect::get(&js_sys::global(), &JsValue::from_str(global))?;
    if library.is_undefined() || library.is_null() {
        return Ok(false);
    }
    let create = Reflect::get(&library, &JsValue::from_str("createIcons"))?;
    let Some(create) = create.dyn_ref::<Function>() else {
        return Ok(false);
    };
    create.call0(&library)?;
    Ok(true)
}
