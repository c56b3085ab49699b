//! `#registrationForm`: inline validation, the medical-details toggle and the
//! success panel.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::Context;
use crate::consts::ERROR_CLASS;
use crate::error::SiteError;
use crate::state::registration::{
    Field, FormPhase, FormSnapshot, MedicalAnswer, RegistrationForm, Submission, SubmitOutcome, error_element_id,
    medical_note_visibility,
};
use crate::util::dom::{self, Listener, Listeners};

pub struct RegistrationController {
    state: Rc<RefCell<RegistrationForm>>,
    _listeners: Listeners,
}

#[derive(Clone)]
struct Form {
    ctx: Rc<Context>,
    form: HtmlFormElement,
    state: Rc<RefCell<RegistrationForm>>,
}

impl Form {
    fn document(&self) -> &Document {
        &self.ctx.document
    }

    fn medical_answer(&self) -> Option<MedicalAnswer> {
        let value = checked_value(&self.form, "medicalCondition")?;
        match dom::by_id::<HtmlInputElement>(self.document(), "medicalYes") {
            Some(yes) if yes.checked() => Some(MedicalAnswer::Yes),
            Some(_) => Some(MedicalAnswer::No),
            None => Some(MedicalAnswer::parse(&value).unwrap_or(MedicalAnswer::No)),
        }
    }

    fn snapshot(&self) -> FormSnapshot {
        let mut snapshot = FormSnapshot::new();
        for field in Field::TEXT {
            if let Some(value) = dom::by_id::<Element>(self.document(), field.id()).and_then(|el| field_value(&el)) {
                snapshot.set(field, value);
            }
        }
        snapshot.age_group = checked_value(&self.form, "ageGroup");
        snapshot.medical = self.medical_answer();
        snapshot
    }

    fn show_error(&self, id: &str, message: &str) {
        if let Some(input) = self.document().get_element_by_id(id) {
            dom::set_class(&input, ERROR_CLASS, true);
        }
        if let Some(slot) = self.document().get_element_by_id(&error_element_id(id)) {
            slot.set_text_content(Some(message));
        }
    }

    fn clear_error(&self, input: &Element) {
        if let Some(slot) = self.document().get_element_by_id(&error_element_id(&input.id())) {
            slot.set_text_content(Some(""));
        }
        dom::set_class(input, ERROR_CLASS, false);
    }

    fn clear_errors(&self) {
        for slot in dom::document_query_all(self.document(), ".error-message") {
            slot.set_text_content(Some(""));
        }
        for input in dom::document_query_all(self.document(), &format!(".{ERROR_CLASS}")) {
            dom::set_class(&input, ERROR_CLASS, false);
        }
    }

    fn submit(&self) {
        self.clear_errors();
        let outcome = self.state.borrow_mut().submit(&self.snapshot());
        match outcome {
            SubmitOutcome::Accepted => self.accept(),
            SubmitOutcome::Rejected(report) => {
                log::debug!("registration rejected: {} invalid fields", report.errors().len());
                for error in report.errors() {
                    self.show_error(error.field.id(), &error.message);
                }
            }
            SubmitOutcome::Ignored => {}
        }
    }

    fn accept(&self) {
        let success = dom::by_id::<HtmlElement>(self.document(), "successMessage");
        if let Some(success) = &success {
            dom::set_style(success, "display", Some("block"));
        }
        dom::set_style(&self.form, "display", Some("none"));
        if let Some(success) = &success {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            success.scroll_into_view_with_scroll_into_view_options(&options);
        }

        match collect_submission(&self.form).and_then(|submission| submission.persist(self.ctx.store.as_ref())) {
            Ok(()) => log::info!("registration stored locally"),
            Err(err) => log::warn!("registration not stored: {err}"),
        }
    }

    fn sync_medical_note(&self) {
        let visibility = medical_note_visibility(self.medical_answer());
        if let Some(group) = dom::by_id::<HtmlElement>(self.document(), "medicalNoteGroup") {
            dom::set_style(&group, "display", Some(if visibility.visible { "block" } else { "none" }));
        }
        let Some(note) = dom::by_id::<Element>(self.document(), Field::MedicalNote.id()) else {
            return;
        };
        if visibility.required {
            dom::set_attr(&note, "required", "required");
        } else {
            dom::remove_attr(&note, "required");
        }
        if visibility.clear {
            set_field_value(&note, "");
        }
    }

    fn blur(&self, input: &Element) {
        let Some(value) = field_value(input) else {
            return;
        };
        let label = input.previous_element_sibling().and_then(|el| el.text_content());
        let required = input.has_attribute("required");
        let id = input.id();
        let message = self.state.borrow_mut().blur(&id, label.as_deref(), &value, required);
        if let Some(message) = message {
            self.show_error(&id, &message);
        }
    }

    fn input(&self, input: &Element) {
        let cleared = self.state.borrow_mut().input(&input.id());
        if cleared {
            self.clear_error(input);
        }
    }
}

impl RegistrationController {
    pub fn attach(ctx: &Rc<Context>) -> Option<Self> {
        let form_el: HtmlFormElement = dom::by_id(&ctx.document, "registrationForm")?;
        let state = Rc::new(RefCell::new(RegistrationForm::new()));
        let form = Form { ctx: Rc::clone(ctx), form: form_el.clone(), state: Rc::clone(&state) };
        let mut listeners = Listeners::new();

        for id in ["medicalYes", "medicalNo"] {
            let Some(radio) = dom::by_id::<Element>(&ctx.document, id) else {
                continue;
            };
            let form = form.clone();
            listeners.keep(Listener::new(&radio, "change", move |_: Event| form.sync_medical_note()));
        }

        for input in dom::query_all(&form_el, "input, textarea") {
            listeners.keep({
                let form = form.clone();
                let target = input.clone();
                Listener::new(&input, "blur", move |_: Event| form.blur(&target))
            });
            listeners.keep({
                let form = form.clone();
                let target = input.clone();
                Listener::new(&input, "input", move |_: Event| form.input(&target))
            });
        }

        listeners.keep(Listener::new(&form_el, "submit", move |event: Event| {
            event.prevent_default();
            form.submit();
        }));

        Some(Self { state, _listeners: listeners })
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.state.borrow().phase() == FormPhase::Submitted
    }
}

fn field_value(element: &Element) -> Option<String> {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    element.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value)
}

fn set_field_value(element: &Element, value: &str) {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.set_value(value);
    }
}

/// Value of the checked radio in group `name`.
fn checked_value(form: &HtmlFormElement, name: &str) -> Option<String> {
    dom::query::<HtmlInputElement>(form, &format!(r#"input[name="{name}"]:checked"#)).map(|radio| radio.value())
}

/// Every named string entry of the form. File entries are skipped.
fn collect_submission(form: &HtmlFormElement) -> Result<Submission, SiteError> {
    let data = FormData::new_with_form(form)?;
    let mut fields = BTreeMap::new();
    let Some(entries) = js_sys::try_iter(&data)? else {
        return Ok(Submission(fields));
    };
    for entry in entries {
        let pair = Array::from(&entry?);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.insert(name, value);
        }
    }
    Ok(Submission(fields))
}
