//! Quote request: the long project form on the first tab.

use serde::Serialize;

use super::{word_count, ContactForm, ErrorMap, FieldError};
use crate::core::config::{EQUIPMENT_CHAR_LIMIT, REQUESTS_WORD_LIMIT, SHORT_TEXT_LIMIT};
use crate::core::effects::Submission;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuoteField {
    Name,
    CompanyName,
    Email,
    ConfirmEmail,
    PhoneNumber,
    Address,
    ProjectType,
    StartDate,
    EndDate,
    Equipment,
    Requests,
    Privacy,
}

/// Kind of construction project the quote is for. The value strings are the
/// ones the office works with and are what ends up in the submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProjectType {
    #[serde(rename = "Woningbouw")]
    Residential,
    #[serde(rename = "Commerciële bouw")]
    Commercial,
    #[serde(rename = "Industriële bouw")]
    Industrial,
    #[serde(rename = "Infrastructuur")]
    Infrastructure,
    #[serde(rename = "Renovatie")]
    Renovation,
    #[serde(rename = "Landschapsarchitectuur")]
    Landscaping,
    #[serde(rename = "Anders")]
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 7] = [
        ProjectType::Residential,
        ProjectType::Commercial,
        ProjectType::Industrial,
        ProjectType::Infrastructure,
        ProjectType::Renovation,
        ProjectType::Landscaping,
        ProjectType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ProjectType::Residential => "Woningbouw",
            ProjectType::Commercial => "Commerciële bouw",
            ProjectType::Industrial => "Industriële bouw",
            ProjectType::Infrastructure => "Infrastructuur",
            ProjectType::Renovation => "Renovatie",
            ProjectType::Landscaping => "Landschapsarchitectuur",
            ProjectType::Other => "Anders",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ProjectType::Residential => "project-type-residential",
            ProjectType::Commercial => "project-type-commercial",
            ProjectType::Industrial => "project-type-industrial",
            ProjectType::Infrastructure => "project-type-infrastructure",
            ProjectType::Renovation => "project-type-renovation",
            ProjectType::Landscaping => "project-type-landscaping",
            ProjectType::Other => "project-type-other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    pub name: String,
    pub company_name: String,
    pub email: String,
    pub confirm_email: String,
    pub phone_number: String,
    pub address: String,
    pub project_type: Option<ProjectType>,
    /// `YYYY-MM-DD` as delivered by the date input.
    pub start_date: String,
    pub end_date: String,
    pub equipment: String,
    pub requests: String,
    pub privacy: bool,
}

impl ContactForm for QuoteForm {
    type Field = QuoteField;

    fn validate(&self) -> ErrorMap<QuoteField> {
        use QuoteField as F;

        let mut errors = ErrorMap::new();
        errors.require(F::Name, &self.name, FieldError::NameRequired);
        errors.require(F::CompanyName, &self.company_name, FieldError::CompanyNameRequired);
        errors.limit_chars(
            F::CompanyName,
            &self.company_name,
            SHORT_TEXT_LIMIT,
            FieldError::CompanyNameLimit,
        );
        errors.require_email(F::Email, &self.email);
        if self.email != self.confirm_email {
            errors.set(F::ConfirmEmail, FieldError::EmailMismatch);
        }
        errors.require(F::PhoneNumber, &self.phone_number, FieldError::PhoneRequired);
        errors.require(F::Address, &self.address, FieldError::AddressRequired);
        errors.limit_chars(F::Address, &self.address, SHORT_TEXT_LIMIT, FieldError::AddressLimit);
        if self.project_type.is_none() {
            errors.set(F::ProjectType, FieldError::ProjectTypeRequired);
        }
        errors.require(F::StartDate, &self.start_date, FieldError::StartDateRequired);
        errors.require(F::EndDate, &self.end_date, FieldError::EndDateRequired);
        errors.require(F::Equipment, &self.equipment, FieldError::EquipmentRequired);
        errors.limit_chars(
            F::Equipment,
            &self.equipment,
            EQUIPMENT_CHAR_LIMIT,
            FieldError::EquipmentLimit,
        );
        if word_count(&self.requests) > REQUESTS_WORD_LIMIT {
            errors.set(F::Requests, FieldError::RequestsLimit);
        }
        if !self.privacy {
            errors.set(F::Privacy, FieldError::PrivacyRequired);
        }
        errors
    }
}

impl QuoteForm {
    /// Alert plus a logged copy of the request.
    pub fn submission(&self) -> Submission {
        Submission::Notify {
            form: "quote",
            message_key: "contact-form-success",
            payload: serde_json::to_value(self).unwrap_or_default(),
        }
    }
}
