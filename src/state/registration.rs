//! Registration form validation and submission lifecycle.
//!
//! DESIGN
//! ======
//! The form is `Editing` until a submit attempt passes every rule, after which
//! it is `Submitted` for the rest of the page's life. Validation runs on a
//! [`FormSnapshot`] read from the DOM, so every rule is checkable without a
//! browser. At most one error is reported per field; a later rule for the
//! same field replaces the earlier message.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::consts::REGISTRATION_KEY;
use crate::error::SiteError;
use crate::util::storage::{KeyValueStore, save_json};

/// Minimum length of a phone number, separators included.
pub const MIN_PHONE_LEN: usize = 8;

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));
static PHONE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| compile(r"^[0-9\s+()-]+$"));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            log::error!("validation pattern {pattern:?} rejected: {err}");
            None
        }
    }
}

/// `local@domain.tld` shape, no whitespace.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Digits, spaces, `+`, `-` and parentheses, at least [`MIN_PHONE_LEN`] long.
#[must_use]
pub fn is_valid_phone(value: &str) -> bool {
    value.chars().count() >= MIN_PHONE_LEN && PHONE_RE.as_ref().is_some_and(|re| re.is_match(value))
}

/// Fields the validator knows about. The element id of each field is also the
/// prefix of its error element (`<id>Error`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    PhoneNumber,
    EmailAddress,
    EmergencyContactName,
    EmergencyContactNumber,
    AgeGroup,
    MedicalCondition,
    MedicalNote,
}

impl Field {
    /// Text inputs that must never be blank.
    pub const REQUIRED_TEXT: [Self; 5] = [
        Self::FullName,
        Self::PhoneNumber,
        Self::EmailAddress,
        Self::EmergencyContactName,
        Self::EmergencyContactNumber,
    ];

    /// Every free-text input, including the conditional medical note.
    pub const TEXT: [Self; 6] = [
        Self::FullName,
        Self::PhoneNumber,
        Self::EmailAddress,
        Self::EmergencyContactName,
        Self::EmergencyContactNumber,
        Self::MedicalNote,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::PhoneNumber => "phoneNumber",
            Self::EmailAddress => "emailAddress",
            Self::EmergencyContactName => "emergencyContactName",
            Self::EmergencyContactNumber => "emergencyContactNumber",
            Self::AgeGroup => "ageGroup",
            Self::MedicalCondition => "medicalCondition",
            Self::MedicalNote => "medicalNote",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::PhoneNumber => "Phone Number",
            Self::EmailAddress => "Email Address",
            Self::EmergencyContactName => "Emergency Contact Name",
            Self::EmergencyContactNumber => "Emergency Contact Number",
            Self::AgeGroup => "Age Group",
            Self::MedicalCondition => "Medical Condition",
            Self::MedicalNote => "Medical details",
        }
    }
}

/// Id of the element that displays errors for input `id`.
#[must_use]
pub fn error_element_id(id: &str) -> String {
    format!("{id}Error")
}

/// Message for a blank required input.
#[must_use]
pub fn required_message(label: Option<&str>) -> String {
    let label = label.map(str::trim).filter(|l| !l.is_empty()).unwrap_or("This field");
    format!("{label} is required")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MedicalAnswer {
    No,
    Yes,
}

impl MedicalAnswer {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "no" => Some(Self::No),
            "yes" => Some(Self::Yes),
            _ => None,
        }
    }
}

/// How the medical-details group should look for the current answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MedicalNoteVisibility {
    pub visible: bool,
    pub required: bool,
    /// Wipe whatever was typed into the note.
    pub clear: bool,
}

#[must_use]
pub fn medical_note_visibility(answer: Option<MedicalAnswer>) -> MedicalNoteVisibility {
    let yes = answer == Some(MedicalAnswer::Yes);
    MedicalNoteVisibility { visible: yes, required: yes, clear: !yes }
}

/// The form's values at the moment of a submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    text: BTreeMap<Field, String>,
    pub age_group: Option<String>,
    pub medical: Option<MedicalAnswer>,
}

impl FormSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.text.insert(field, value.into());
    }

    /// Raw value of a text field; `None` when the page has no such input.
    #[must_use]
    pub fn value(&self, field: Field) -> Option<&str> {
        self.text.get(&field).map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    #[must_use]
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    fn flag(&mut self, field: Field, message: impl Into<String>) {
        let message = message.into();
        match self.errors.iter_mut().find(|e| e.field == field) {
            Some(existing) => existing.message = message,
            None => self.errors.push(FieldError { field, message }),
        }
    }
}

/// Run every rule against `snapshot`.
#[must_use]
pub fn validate(snapshot: &FormSnapshot) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in Field::REQUIRED_TEXT {
        if snapshot.value(field).unwrap_or("").trim().is_empty() {
            report.flag(field, required_message(Some(field.label())));
        }
    }

    if let Some(email) = snapshot.value(Field::EmailAddress).filter(|v| !v.is_empty()) {
        if !is_valid_email(email) {
            report.flag(Field::EmailAddress, "Please enter a valid email address");
        }
    }

    for field in [Field::PhoneNumber, Field::EmergencyContactNumber] {
        if let Some(phone) = snapshot.value(field).filter(|v| !v.is_empty()) {
            if !is_valid_phone(phone) {
                report.flag(field, "Please enter a valid phone number");
            }
        }
    }

    if snapshot.age_group.is_none() {
        report.flag(Field::AgeGroup, "Please select an age group");
    }

    match snapshot.medical {
        None => report.flag(Field::MedicalCondition, "Please select an option"),
        Some(MedicalAnswer::Yes) if snapshot.value(Field::MedicalNote).unwrap_or("").trim().is_empty() => {
            report.flag(Field::MedicalNote, "Please provide details about your medical condition");
        }
        Some(_) => {}
    }

    report
}

/// Last accepted form, as `name → value` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission(pub BTreeMap<String, String>);

impl Submission {
    /// Store the submission locally. Nothing is sent anywhere.
    ///
    /// # Errors
    ///
    /// Propagates serialization and storage failures.
    pub fn persist(&self, store: &dyn KeyValueStore) -> Result<(), SiteError> {
        save_json(store, REGISTRATION_KEY, self)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(ValidationReport),
    /// The form was already accepted; further submits are ignored.
    Ignored,
}

/// Submit lifecycle plus the set of inputs currently showing an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    phase: FormPhase,
    flagged: BTreeSet<String>,
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    #[must_use]
    pub fn is_flagged(&self, id: &str) -> bool {
        self.flagged.contains(id)
    }

    /// Ids of the inputs currently marked invalid.
    pub fn flagged(&self) -> impl Iterator<Item = &str> {
        self.flagged.iter().map(String::as_str)
    }

    /// A submit attempt. Previous errors are dropped before validating.
    pub fn submit(&mut self, snapshot: &FormSnapshot) -> SubmitOutcome {
        if self.phase == FormPhase::Submitted {
            return SubmitOutcome::Ignored;
        }
        self.flagged.clear();
        let report = validate(snapshot);
        if report.is_valid() {
            self.phase = FormPhase::Submitted;
            return SubmitOutcome::Accepted;
        }
        self.flagged
            .extend(report.errors().iter().map(|e| e.field.id().to_owned()));
        SubmitOutcome::Rejected(report)
    }

    /// Single-field check when input `id` loses focus. Only the required rule
    /// applies here; format rules wait for submit.
    pub fn blur(&mut self, id: &str, label: Option<&str>, value: &str, required: bool) -> Option<String> {
        if !required || !value.trim().is_empty() {
            return None;
        }
        self.flagged.insert(id.to_owned());
        Some(required_message(label))
    }

    /// Typing into a flagged input clears its error straight away, without
    /// re-running the rule. Returns whether there was an error to clear.
    pub fn input(&mut self, id: &str) -> bool {
        self.flagged.remove(id)
    }
}
