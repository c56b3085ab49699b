//! Text substitution over translatable elements.
//!
//! [`translate_targets`] is written against the [`TranslationTarget`] trait so
//! the substitution rules can be tested without a document. The DOM
//! implementation lives on [`web_sys::Element`].

#[cfg(test)]
#[path = "apply_test.rs"]
mod apply_test;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};

use super::{Dictionary, Language};
use crate::consts::TRANSLATE_ATTR;

/// How a target displays its translated string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    /// Ordinary element: replace its text content.
    Text,
    /// `<input>` or `<textarea>`: replace the placeholder when one is present,
    /// otherwise the value.
    Field { has_placeholder: bool },
}

/// An element carrying a translation key.
pub trait TranslationTarget {
    fn translation_key(&self) -> Option<String>;
    fn kind(&self) -> TargetKind;
    fn set_placeholder(&mut self, text: &str);
    fn set_value(&mut self, text: &str);
    fn set_text(&mut self, text: &str);
}

/// Apply `language` to every target. Targets whose key has no entry for that
/// language keep their current content.
///
/// Returns the number of targets updated.
pub fn translate_targets<T: TranslationTarget>(
    targets: &mut [T],
    dictionary: &Dictionary,
    language: Language,
) -> usize {
    let mut updated = 0;
    for target in targets.iter_mut() {
        let Some(key) = target.translation_key() else {
            continue;
        };
        let Some(text) = dictionary.lookup(language, &key) else {
            continue;
        };
        match target.kind() {
            TargetKind::Field { has_placeholder: true } => target.set_placeholder(text),
            TargetKind::Field { has_placeholder: false } => target.set_value(text),
            TargetKind::Text => target.set_text(text),
        }
        updated += 1;
    }
    updated
}

impl TranslationTarget for Element {
    fn translation_key(&self) -> Option<String> {
        self.get_attribute(TRANSLATE_ATTR)
    }

    fn kind(&self) -> TargetKind {
        if self.is_instance_of::<HtmlInputElement>() || self.is_instance_of::<HtmlTextAreaElement>() {
            TargetKind::Field { has_placeholder: self.has_attribute("placeholder") }
        } else {
            TargetKind::Text
        }
    }

    fn set_placeholder(&mut self, text: &str) {
        if let Err(err) = self.set_attribute("placeholder", text) {
            log::warn!("placeholder not translated: {err:?}");
        }
    }

    fn set_value(&mut self, text: &str) {
        if let Some(input) = self.dyn_ref::<HtmlInputElement>() {
            input.set_value(text);
        } else if let Some(area) = self.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(text);
        }
    }

    fn set_text(&mut self, text: &str) {
        self.set_text_content(Some(text));
    }
}
