//! Contact form records, their validation rules and the shared edit/submit
//! state machine.
//!
//! Every form follows the same lifecycle:
//! - created with empty defaults when its tab mounts,
//! - mutated field by field through [`FormState::edit`], which clears that
//!   field's error regardless of the new value,
//! - validated in one pass by [`FormState::submit`], which replaces the whole
//!   error map.
//!
//! Error codes are [`FieldError`] values; their translation keys are resolved
//! by the views.

use std::collections::BTreeMap;
use std::fmt::Debug;

use once_cell::sync::Lazy;
use regex::Regex;

pub mod callback;
pub mod consultation;
pub mod quote;
pub mod tax_return;

pub use callback::{CallbackField, CallbackForm};
pub use consultation::{ConsultationField, ConsultationForm, ConsultationTopic};
pub use quote::{ProjectType, QuoteField, QuoteForm};
pub use tax_return::{TaxReturnField, TaxReturnForm, TAX_YEARS};

/// Translator handed to summary builders: message id in, display text out.
pub type Translate<'a> = &'a dyn Fn(&str) -> String;

/// A validation failure attached to one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    NameRequired,
    FullNameRequired,
    CompanyNameRequired,
    CompanyNameLimit,
    EmailRequired,
    EmailInvalid,
    EmailMismatch,
    PhoneRequired,
    AddressRequired,
    AddressLimit,
    ProjectTypeRequired,
    StartDateRequired,
    EndDateRequired,
    EquipmentRequired,
    EquipmentLimit,
    RequestsLimit,
    PrivacyRequired,
    TopicRequired,
    OtherTopicRequired,
    TaxYearRequired,
}

impl FieldError {
    pub const ALL: [FieldError; 20] = [
        FieldError::NameRequired,
        FieldError::FullNameRequired,
        FieldError::CompanyNameRequired,
        FieldError::CompanyNameLimit,
        FieldError::EmailRequired,
        FieldError::EmailInvalid,
        FieldError::EmailMismatch,
        FieldError::PhoneRequired,
        FieldError::AddressRequired,
        FieldError::AddressLimit,
        FieldError::ProjectTypeRequired,
        FieldError::StartDateRequired,
        FieldError::EndDateRequired,
        FieldError::EquipmentRequired,
        FieldError::EquipmentLimit,
        FieldError::RequestsLimit,
        FieldError::PrivacyRequired,
        FieldError::TopicRequired,
        FieldError::OtherTopicRequired,
        FieldError::TaxYearRequired,
    ];

    /// Translation key of the inline message.
    pub fn key(self) -> &'static str {
        match self {
            FieldError::NameRequired => "validation-name-required",
            FieldError::FullNameRequired => "validation-full-name-required",
            FieldError::CompanyNameRequired => "validation-company-name-required",
            FieldError::CompanyNameLimit => "validation-company-name-limit",
            FieldError::EmailRequired => "validation-email-required",
            FieldError::EmailInvalid => "validation-email-invalid",
            FieldError::EmailMismatch => "validation-email-mismatch",
            FieldError::PhoneRequired => "validation-phone-required",
            FieldError::AddressRequired => "validation-address-required",
            FieldError::AddressLimit => "validation-address-limit",
            FieldError::ProjectTypeRequired => "validation-project-type-required",
            FieldError::StartDateRequired => "validation-start-date-required",
            FieldError::EndDateRequired => "validation-end-date-required",
            FieldError::EquipmentRequired => "validation-equipment-required",
            FieldError::EquipmentLimit => "validation-equipment-limit",
            FieldError::RequestsLimit => "validation-requests-limit",
            FieldError::PrivacyRequired => "validation-privacy-required",
            FieldError::TopicRequired => "validation-topic-required",
            FieldError::OtherTopicRequired => "validation-other-topic-required",
            FieldError::TaxYearRequired => "validation-tax-year-required",
        }
    }
}

/// At most one error per field, ordered by field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMap<F: Ord> {
    entries: BTreeMap<F, FieldError>,
}

impl<F: Ord> Default for ErrorMap<F> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> ErrorMap<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `error` for `field`, replacing any earlier error for it.
    pub fn set(&mut self, field: F, error: FieldError) {
        self.entries.insert(field, error);
    }

    pub fn get(&self, field: F) -> Option<FieldError> {
        self.entries.get(&field).copied()
    }

    pub fn contains(&self, field: F) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn clear(&mut self, field: F) -> Option<FieldError> {
        self.entries.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, FieldError)> + '_ {
        self.entries.iter().map(|(f, e)| (*f, *e))
    }

    /// Record `error` when `value` is blank.
    pub(crate) fn require(&mut self, field: F, value: &str, error: FieldError) {
        if value.is_empty() {
            self.set(field, error);
        }
    }

    /// Record `error` when `value` holds more than `limit` characters.
    pub(crate) fn limit_chars(&mut self, field: F, value: &str, limit: usize, error: FieldError) {
        if value.chars().count() > limit {
            self.set(field, error);
        }
    }

    /// Required email with a shape check once something was typed.
    pub(crate) fn require_email(&mut self, field: F, value: &str) {
        if value.is_empty() {
            self.set(field, FieldError::EmailRequired);
        } else if !is_valid_email(value) {
            self.set(field, FieldError::EmailInvalid);
        }
    }
}

/// A form record with its own field identifiers and validation rules.
pub trait ContactForm: Clone + Default + PartialEq {
    type Field: Copy + Ord + Debug;

    /// Run every rule and collect the failures.
    fn validate(&self) -> ErrorMap<Self::Field>;
}

/// Form data plus the inline errors currently on display.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T: ContactForm> {
    pub data: T,
    pub errors: ErrorMap<T::Field>,
}

impl<T: ContactForm> Default for FormState<T> {
    fn default() -> Self {
        Self {
            data: T::default(),
            errors: ErrorMap::default(),
        }
    }
}

impl<T: ContactForm> FormState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a change to `field` and drop its error, valid or not.
    pub fn edit(&mut self, field: T::Field, apply: impl FnOnce(&mut T)) {
        apply(&mut self.data);
        self.errors.clear(field);
    }

    /// Validate the whole form, replacing the displayed errors.
    /// Returns `true` when the form may be submitted.
    pub fn submit(&mut self) -> bool {
        self.errors = self.data.validate();
        self.errors.is_empty()
    }

    pub fn error(&self, field: T::Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

/// Loose email shape check: something, `@`, something, `.`, something.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_SHAPE.is_match(value)
}

/// Number of whitespace-delimited, non-empty tokens.
pub fn word_count(value: &str) -> usize {
    value.split_whitespace().count()
}

/// "Yes"/"No" rendering for boolean summary lines.
pub(crate) fn yes_no(tr: Translate<'_>, value: bool) -> String {
    if value {
        tr("summary-yes")
    } else {
        tr("summary-no")
    }
}
