//! `#addToCart` and `#addToFavorites` on the event page.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Event, HtmlElement};

use super::Context;
use crate::consts::{CART_KEY, FAVORITES_KEY};
use crate::state::saved::{SaveOutcome, SavedItem, SavedList, add_to_cart, toggle_favorite};
use crate::util::dom::{self, Listener, Listeners};
use crate::util::storage::{load_list, save_json};
use crate::util::timing::Debouncer;

pub struct SavedButtons {
    _listeners: Listeners,
}

impl SavedList {
    fn storage_key(self) -> &'static str {
        match self {
            Self::Cart => CART_KEY,
            Self::Favorites => FAVORITES_KEY,
        }
    }

    fn button_id(self) -> &'static str {
        match self {
            Self::Cart => "addToCart",
            Self::Favorites => "addToFavorites",
        }
    }
}

/// Temporary label and highlight on a button, restored after a delay.
struct Feedback {
    button: HtmlElement,
    original: RefCell<Option<String>>,
    restore: Debouncer,
}

impl Feedback {
    fn show(self: &Rc<Self>, label: &str, highlight: bool) {
        {
            let mut original = self.original.borrow_mut();
            if original.is_none() {
                *original = Some(self.button.text_content().unwrap_or_default());
            }
        }
        self.button.set_text_content(Some(label));
        if highlight {
            dom::set_style(&self.button, "background-color", Some("var(--accent-primary)"));
            dom::set_style(&self.button, "color", Some("var(--bg-primary)"));
        }
        let this = Rc::downgrade(self);
        self.restore.schedule(move || {
            if let Some(this) = this.upgrade() {
                this.reset();
            }
        });
    }

    fn reset(&self) {
        if let Some(original) = self.original.borrow_mut().take() {
            self.button.set_text_content(Some(&original));
        }
        dom::set_style(&self.button, "background-color", None);
        dom::set_style(&self.button, "color", None);
    }
}

impl SavedButtons {
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let mut listeners = Listeners::new();
        for list in [SavedList::Cart, SavedList::Favorites] {
            let Some(button) = dom::by_id::<HtmlElement>(&ctx.document, list.button_id()) else {
                continue;
            };
            let feedback = Rc::new(Feedback {
                button: button.clone(),
                original: RefCell::new(None),
                restore: Debouncer::new(ctx.config.feedback_ms),
            });
            let ctx = Rc::clone(ctx);
            listeners.keep(Listener::new(&button, "click", move |_: Event| {
                let outcome = press(&ctx, list);
                feedback.show(outcome.feedback(list), outcome.highlights());
            }));
        }
        (!listeners.is_empty()).then_some(Self { _listeners: listeners })
    }
}

/// Apply one button press to the stored list.
fn press(ctx: &Context, list: SavedList) -> SaveOutcome {
    let title = dom::warn_on_err(ctx.document.query_selector(".event-hero-title"), ".event-hero-title")
        .flatten()
        .and_then(|el| el.text_content())
        .filter(|text| !text.is_empty());
    let added_at = String::from(js_sys::Date::new_0().to_iso_string());
    let trip = &ctx.config.event;

    let mut items: Vec<SavedItem> = load_list(ctx.store.as_ref(), list.storage_key());
    let outcome = match list {
        SavedList::Cart => add_to_cart(&mut items, SavedItem::cart_entry(trip, title, added_at)),
        SavedList::Favorites => toggle_favorite(&mut items, SavedItem::favorite_entry(trip, title, added_at)),
    };
    if outcome.changed() {
        if let Err(err) = save_json(ctx.store.as_ref(), list.storage_key(), &items) {
            log::warn!("{} not saved: {err}", list.storage_key());
        }
    }
    log::debug!("{}: {outcome:?}", list.storage_key());
    outcome
}
