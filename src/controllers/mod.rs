//! DOM bindings.
//!
//! Each controller looks up the elements it needs in `attach` and returns
//! `None` when any required one is missing. A returned controller owns its
//! event listeners; dropping it detaches them. State shared between a
//! controller's handlers lives in `Rc<RefCell<_>>`, since every handler runs
//! on the page's single thread.

pub mod carousel;
pub mod errors;
pub mod hero;
pub mod language;
pub mod lightbox;
pub mod nav;
pub mod registration;
pub mod saved;
pub mod scroll;
pub mod theme;

use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::SiteConfig;
use crate::util::icons::IconRefresher;
use crate::util::storage::KeyValueStore;

use self::language::Translator;

/// Everything a controller may need besides its own elements.
pub struct Context {
    pub window: Window,
    pub document: Document,
    pub config: SiteConfig,
    pub store: Rc<dyn KeyValueStore>,
    pub icons: IconRefresher,
    pub translator: Translator,
}

impl Context {
    #[must_use]
    pub fn new(window: Window, document: Document, config: SiteConfig, store: Rc<dyn KeyValueStore>) -> Rc<Self> {
        let icons = IconRefresher::from_config(&config);
        let translator = Translator::new(document.clone(), Rc::clone(&store), &config);
        Rc::new(Self { window, document, config, store, icons, translator })
    }

    /// Re-render icons, then re-apply the current language to whatever the
    /// icon library or a toggle replaced.
    pub fn refresh_decorations(&self) {
        self.icons.refresh();
        self.translator.apply();
    }
}
