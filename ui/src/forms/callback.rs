//! Callback request: name, company and a number to ring back.

use serde::Serialize;

use super::{ContactForm, ErrorMap, FieldError};
use crate::core::effects::Submission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CallbackField {
    Name,
    CompanyName,
    PhoneNumber,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackForm {
    pub name: String,
    pub company_name: String,
    pub phone_number: String,
}

impl ContactForm for CallbackForm {
    type Field = CallbackField;

    fn validate(&self) -> ErrorMap<CallbackField> {
        let mut errors = ErrorMap::new();
        errors.require(CallbackField::Name, &self.name, FieldError::NameRequired);
        errors.require(
            CallbackField::CompanyName,
            &self.company_name,
            FieldError::CompanyNameRequired,
        );
        errors.require(
            CallbackField::PhoneNumber,
            &self.phone_number,
            FieldError::PhoneRequired,
        );
        errors
    }
}

impl CallbackForm {
    pub fn submission(&self) -> Submission {
        Submission::Notify {
            form: "callback",
            message_key: "contact-callback-success",
            payload: serde_json::to_value(self).unwrap_or_default(),
        }
    }
}
