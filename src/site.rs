//! Page-level mounting.
//!
//! [`Site`] owns every controller that found its elements on the current
//! page. It is built once, after the DOM is parsed, and kept in a
//! thread-local slot for the page's lifetime; later mount requests find the
//! slot occupied and do nothing.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Event;

use crate::config::SiteConfig;
use crate::controllers::carousel::Carousel;
use crate::controllers::errors::ErrorReporter;
use crate::controllers::hero::{HeroEntrance, HeroSlider};
use crate::controllers::language::LanguageMenu;
use crate::controllers::lightbox::LightboxController;
use crate::controllers::nav::NavController;
use crate::controllers::registration::RegistrationController;
use crate::controllers::saved::SavedButtons;
use crate::controllers::scroll::{HeaderShadow, SmoothScroll};
use crate::controllers::theme::ThemeController;
use crate::controllers::Context;
use crate::error::SiteError;
use crate::util::dom::{self, Listener};
use crate::util::storage::{BrowserStore, KeyValueStore, MemoryStore};

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
    static PENDING: RefCell<Option<Listener>> = const { RefCell::new(None) };
    static ERRORS: RefCell<Option<ErrorReporter>> = const { RefCell::new(None) };
}

/// Every controller mounted on this page.
pub struct Site {
    ctx: Rc<Context>,
    theme: Option<ThemeController>,
    nav: Option<NavController>,
    smooth_scroll: Option<SmoothScroll>,
    header_shadow: Option<HeaderShadow>,
    hero_slider: Option<HeroSlider>,
    hero_entrance: Option<HeroEntrance>,
    carousels: Vec<Carousel>,
    language_menu: Option<LanguageMenu>,
    lightbox: Option<LightboxController>,
    saved: Option<SavedButtons>,
    registration: Option<RegistrationController>,
}

impl Site {
    /// Attach every controller whose elements exist.
    ///
    /// # Errors
    ///
    /// Fails only without a window or document.
    pub fn mount() -> Result<Self, SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let config = SiteConfig::from_document(&document);
        let store: Rc<dyn KeyValueStore> = match BrowserStore::local() {
            Ok(store) => Rc::new(store),
            Err(err) => {
                log::warn!("{err}; preferences will not survive a reload");
                Rc::new(MemoryStore::new())
            }
        };

        let ctx = Context::new(window, document, config, store);

        let carousels = ctx
            .config
            .carousels
            .iter()
            .filter_map(|id| Carousel::attach(&ctx, id))
            .collect();

        let site = Self {
            theme: ThemeController::attach(&ctx),
            nav: NavController::attach(&ctx),
            smooth_scroll: SmoothScroll::attach(&ctx),
            header_shadow: HeaderShadow::attach(&ctx),
            hero_entrance: HeroEntrance::attach(&ctx),
            hero_slider: HeroSlider::attach(&ctx),
            carousels,
            language_menu: LanguageMenu::attach(&ctx),
            lightbox: LightboxController::attach(&ctx),
            saved: SavedButtons::attach(&ctx),
            registration: RegistrationController::attach(&ctx),
            ctx,
        };

        site.ctx.refresh_decorations();
        log::info!("{}", site.summary());
        Ok(site)
    }

    /// One line naming what attached, for the console.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if let Some(theme) = &self.theme {
            parts.push(format!("theme({})", theme.current()));
        }
        let flags = [
            ("nav", self.nav.is_some()),
            ("smooth-scroll", self.smooth_scroll.is_some()),
            ("header-shadow", self.header_shadow.is_some()),
            ("hero-entrance", self.hero_entrance.is_some()),
            ("lightbox", self.lightbox.is_some()),
            ("saved", self.saved.is_some()),
        ];
        parts.extend(flags.into_iter().filter(|(_, on)| *on).map(|(name, _)| name.to_owned()));
        if let Some(menu) = &self.language_menu {
            parts.push(format!("language-menu(expanded={})", menu.is_expanded()));
        }
        if let Some(slider) = &self.hero_slider {
            parts.push(format!("hero-slider(running={})", slider.is_running()));
        }
        for carousel in &self.carousels {
            parts.push(format!("carousel(#{}@{})", carousel.id(), carousel.index()));
        }
        if let Some(registration) = &self.registration {
            parts.push(format!("registration(submitted={})", registration.is_submitted()));
        }
        format!("site mounted [{}] lang={}", parts.join(", "), self.ctx.translator.current())
    }
}

/// Log window errors from this point on, ahead of any mounting.
pub fn report_errors() {
    let window = match dom::window() {
        Ok(window) => window,
        Err(err) => {
            log::warn!("error reporting unavailable: {err}");
            return;
        }
    };
    ERRORS.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(ErrorReporter::attach(&window));
        }
    });
}

/// Mount now if the document is parsed, otherwise on `DOMContentLoaded`.
pub fn mount_when_ready() {
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            log::warn!("site not mounted: {err}");
            return;
        }
    };
    if document.ready_state() != "loading" {
        mount_once();
        return;
    }
    let listener = Listener::new(&document, "DOMContentLoaded", |_: Event| {
        mount_once();
    });
    match listener {
        Ok(listener) => PENDING.with(|slot| *slot.borrow_mut() = Some(listener)),
        Err(err) => log::warn!("site not mounted: {err}"),
    }
}

/// Build the [`Site`] unless one already exists.
pub fn mount_once() {
    let mounted = SITE.with(|slot| slot.borrow().is_some());
    if mounted {
        log::debug!("site already mounted");
        return;
    }
    match Site::mount() {
        Ok(site) => SITE.with(|slot| *slot.borrow_mut() = Some(site)),
        Err(err) => log::warn!("site not mounted: {err}"),
    }
}
