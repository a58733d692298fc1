//! Consultation request, delivered as a prefilled WhatsApp message.

use serde::Serialize;

use super::{yes_no, ContactForm, ErrorMap, FieldError, Translate};
use crate::core::config::WHATSAPP_NUMBER;
use crate::core::effects::Submission;
use crate::core::links;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConsultationField {
    FullName,
    Email,
    Phone,
    WantsWhatsApp,
    Topic,
    OtherTopic,
    Description,
    Attachment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConsultationTopic {
    Tax,
    Company,
    Accounting,
    EmployeeTaxes,
    /// Sentinel: the visitor describes the topic in `other_topic`.
    Other,
}

impl ConsultationTopic {
    pub const ALL: [ConsultationTopic; 5] = [
        ConsultationTopic::Tax,
        ConsultationTopic::Company,
        ConsultationTopic::Accounting,
        ConsultationTopic::EmployeeTaxes,
        ConsultationTopic::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ConsultationTopic::Tax => "tax",
            ConsultationTopic::Company => "company",
            ConsultationTopic::Accounting => "accounting",
            ConsultationTopic::EmployeeTaxes => "employee-taxes",
            ConsultationTopic::Other => "other",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            ConsultationTopic::Tax => "consultation-topic-tax",
            ConsultationTopic::Company => "consultation-topic-company",
            ConsultationTopic::Accounting => "consultation-topic-accounting",
            ConsultationTopic::EmployeeTaxes => "consultation-topic-employee-taxes",
            ConsultationTopic::Other => "consultation-topic-other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.value() == value)
    }

    pub fn needs_elaboration(self) -> bool {
        self == ConsultationTopic::Other
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub wants_whats_app: bool,
    pub topic: Option<ConsultationTopic>,
    pub other_topic: String,
    pub description: String,
    /// File name of the optional attachment.
    pub attachment: Option<String>,
}

impl ContactForm for ConsultationForm {
    type Field = ConsultationField;

    fn validate(&self) -> ErrorMap<ConsultationField> {
        use ConsultationField as F;

        let mut errors = ErrorMap::new();
        errors.require(F::FullName, &self.full_name, FieldError::FullNameRequired);
        errors.require_email(F::Email, &self.email);
        errors.require(F::Phone, &self.phone, FieldError::PhoneRequired);
        match self.topic {
            None => errors.set(F::Topic, FieldError::TopicRequired),
            Some(topic) if topic.needs_elaboration() => {
                errors.require(F::OtherTopic, &self.other_topic, FieldError::OtherTopicRequired)
            }
            Some(_) => {}
        }
        errors
    }
}

impl ConsultationForm {
    /// Topic line as the office should read it: the elaboration for "other",
    /// the translated label otherwise.
    pub fn topic_text(&self, tr: Translate<'_>) -> String {
        match self.topic {
            Some(topic) if topic.needs_elaboration() => self.other_topic.clone(),
            Some(topic) => tr(topic.label_key()),
            None => String::new(),
        }
    }

    /// Multi-line message prefilled into the WhatsApp chat.
    pub fn whatsapp_message(&self, tr: Translate<'_>) -> String {
        let description = if self.description.is_empty() {
            tr("summary-no-description")
        } else {
            self.description.clone()
        };

        let mut message = format!("{}\n\n", tr("whatsapp-message-title"));
        let lines = [
            (tr("summary-full-name"), self.full_name.clone()),
            (tr("summary-email"), self.email.clone()),
            (tr("summary-phone"), self.phone.clone()),
            (tr("summary-whatsapp"), yes_no(tr, self.wants_whats_app)),
            (tr("summary-topic"), self.topic_text(tr)),
            (tr("summary-description"), description),
        ];
        for (label, value) in lines {
            message.push_str(&format!("{label}: {value}\n"));
        }
        message
    }

    pub fn submission(&self, tr: Translate<'_>) -> Submission {
        Submission::OpenWhatsApp {
            url: links::whatsapp_url(WHATSAPP_NUMBER, &self.whatsapp_message(tr)),
            message_key: "contact-consultation-success",
        }
    }
}
