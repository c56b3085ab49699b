//! Language switching: document-wide translation and the header dropdown.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, Event, HtmlElement};

use super::Context;
use crate::config::SiteConfig;
use crate::consts::{ACTIVE_CLASS, LANG_ATTR, RTL_CLASS, TRANSLATE_ATTR};
use crate::i18n::{Dictionary, Direction, Language, LanguageState, translate_targets};
use crate::state::nav::Dropdown;
use crate::util::dom::{self, Listener, Listeners};
use crate::util::storage::KeyValueStore;

/// Applies the visitor's language to the whole document.
pub struct Translator {
    document: Document,
    store: Rc<dyn KeyValueStore>,
    dictionary: &'static Dictionary,
    state: RefCell<LanguageState>,
}

impl Translator {
    pub fn new(document: Document, store: Rc<dyn KeyValueStore>, config: &SiteConfig) -> Self {
        let state = LanguageState::load(store.as_ref(), config.default_language, config.unknown_language);
        let dictionary = Dictionary::builtin();
        for language in Language::ALL {
            log::debug!("{language}: {} dictionary keys", dictionary.len(language));
            let missing = dictionary.missing_keys(language);
            if !missing.is_empty() {
                log::debug!("{language}: {} untranslated keys: {}", missing.len(), missing.join(", "));
            }
        }
        Self { document, store, dictionary, state: RefCell::new(state) }
    }

    #[must_use]
    pub fn current(&self) -> Language {
        self.state.borrow().current()
    }

    /// Switch to the language named by a `data-lang` value and re-render.
    /// Unsupported codes follow the configured policy.
    pub fn select(&self, raw: &str) -> Option<Language> {
        let chosen = self.state.borrow_mut().select(raw, self.store.as_ref());
        if chosen.is_some() {
            self.apply();
        }
        chosen
    }

    /// Re-render the document in the current language.
    pub fn apply(&self) {
        let language = self.current();
        let updated = self.render(language);
        log::debug!("applied {language} to {updated} elements");
    }

    fn render(&self, language: Language) -> usize {
        let mut targets = dom::document_query_all(&self.document, &format!("[{TRANSLATE_ATTR}]"));
        let updated = translate_targets(&mut targets, self.dictionary, language);

        if let Some(root) = self.document.document_element() {
            dom::set_attr(&root, "lang", language.code());
            dom::set_attr(&root, "dir", language.direction().as_str());
        }
        if let Some(body) = self.document.body() {
            dom::set_class(&body, RTL_CLASS, language.direction() == Direction::Rtl);
        }

        self.sync_selector(language);
        updated
    }

    /// Active option, `aria-selected` and the code badge follow the language.
    fn sync_selector(&self, language: Language) {
        for option in dom::document_query_all(&self.document, &format!(".language-option[{LANG_ATTR}]")) {
            let selected = option.get_attribute(LANG_ATTR).as_deref() == Some(language.code());
            dom::set_class(&option, ACTIVE_CLASS, selected);
            dom::set_aria(&option, "aria-selected", selected);
        }
        if let Some(badge) = self.document.get_element_by_id("currentLang") {
            badge.set_text_content(Some(language.badge()));
        }
    }
}

/// The `#languageDropdown` disclosure and its options.
pub struct LanguageMenu {
    state: Rc<RefCell<Dropdown>>,
    _listeners: Listeners,
}

impl LanguageMenu {
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let document = &ctx.document;
        let container: Element = dom::by_id(document, "languageDropdown")?;
        let toggle: HtmlElement = dom::by_id(document, "languageToggle")?;
        let menu: Element = dom::by_id(document, "languageDropdownMenu")?;
        let options = dom::query_all(&menu, ".language-option");
        if options.is_empty() {
            return None;
        }

        let state = Rc::new(RefCell::new(Dropdown::default()));
        let render = {
            let container = container.clone();
            let toggle = toggle.clone();
            move |expanded: bool| {
                dom::set_class(&container, ACTIVE_CLASS, expanded);
                dom::set_aria(&toggle, "aria-expanded", expanded);
            }
        };
        render(false);

        let mut listeners = Listeners::new();

        listeners.keep({
            let state = Rc::clone(&state);
            let render = render.clone();
            Listener::new(&toggle, "click", move |event: Event| {
                event.stop_propagation();
                let expanded = state.borrow_mut().toggle();
                render(expanded);
            })
        });

        listeners.keep({
            let state = Rc::clone(&state);
            let render = render.clone();
            let container = container.clone();
            Listener::new(document, "click", move |event: Event| {
                if state.borrow_mut().document_click(dom::event_within(&container, &event)) {
                    render(false);
                }
            })
        });

        for option in options {
            let state = Rc::clone(&state);
            let render = render.clone();
            let ctx = Rc::clone(ctx);
            let code = option.get_attribute(LANG_ATTR);
            listeners.keep(Listener::new(&option, "click", move |event: Event| {
                event.stop_propagation();
                if let Some(code) = code.as_deref() {
                    ctx.translator.select(code);
                }
                if state.borrow_mut().close() {
                    render(false);
                }
            }));
        }

        listeners.keep({
            let state = Rc::clone(&state);
            Listener::new(document, "keydown", move |event: Event| {
                let Some(key) = dom::key_of(&event) else {
                    return;
                };
                if state.borrow_mut().key(&key) {
                    render(false);
                    dom::warn_on_err(toggle.focus(), "language toggle focus");
                }
            })
        });

        log::debug!("language menu attached ({} listeners)", listeners.len());
        Some(Self { state, _listeners: listeners })
    }

    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.state.borrow().is_expanded()
    }
}
