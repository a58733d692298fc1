//! Annual tax return (jaaropgave) request, handed to the mail client.

use serde::Serialize;

use super::{yes_no, ContactForm, ErrorMap, FieldError, Translate};
use crate::core::config::CONTACT_EMAIL;
use crate::core::effects::Submission;
use crate::core::links;

/// Years the office currently files returns for, newest first.
pub const TAX_YEARS: [u16; 5] = [2025, 2024, 2023, 2022, 2021];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaxReturnField {
    FullName,
    Bsn,
    Email,
    Phone,
    TaxYear,
    Files,
    JointReturn,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxReturnForm {
    pub full_name: String,
    /// Dutch citizen service number; optional.
    pub bsn: String,
    pub email: String,
    pub phone: String,
    pub tax_year: Option<u16>,
    /// File names picked in the upload control.
    pub files: Vec<String>,
    pub joint_return: bool,
}

impl ContactForm for TaxReturnForm {
    type Field = TaxReturnField;

    fn validate(&self) -> ErrorMap<TaxReturnField> {
        use TaxReturnField as F;

        let mut errors = ErrorMap::new();
        errors.require(F::FullName, &self.full_name, FieldError::FullNameRequired);
        errors.require_email(F::Email, &self.email);
        errors.require(F::Phone, &self.phone, FieldError::PhoneRequired);
        if !self.tax_year.is_some_and(|y| TAX_YEARS.contains(&y)) {
            errors.set(F::TaxYear, FieldError::TaxYearRequired);
        }
        errors
    }
}

impl TaxReturnForm {
    /// Parse the `<select>` value; anything outside [`TAX_YEARS`] clears it.
    pub fn parse_year(value: &str) -> Option<u16> {
        value
            .parse::<u16>()
            .ok()
            .filter(|y| TAX_YEARS.contains(y))
    }

    pub fn mail_subject(&self, tr: Translate<'_>) -> String {
        format!("{} – {}", tr("contact-tax-title"), self.full_name)
    }

    pub fn mail_body(&self, tr: Translate<'_>) -> String {
        let bsn = if self.bsn.is_empty() {
            tr("summary-not-provided")
        } else {
            self.bsn.clone()
        };
        let year = self.tax_year.map(|y| y.to_string()).unwrap_or_default();

        let mut body = format!("{}\n\n", tr("mail-body-title"));
        let lines = [
            (tr("summary-full-name"), self.full_name.clone()),
            (tr("summary-bsn"), bsn),
            (tr("summary-email"), self.email.clone()),
            (tr("summary-phone"), self.phone.clone()),
            (tr("summary-tax-year"), year),
            (tr("summary-joint-return"), yes_no(tr, self.joint_return)),
        ];
        for (label, value) in lines {
            body.push_str(&format!("{label}: {value}\n"));
        }
        body.push('\n');
        body.push_str(&tr("mail-body-footer"));
        body
    }

    pub fn submission(&self, tr: Translate<'_>) -> Submission {
        let subject = self.mail_subject(tr);
        let body = self.mail_body(tr);
        Submission::MailTo {
            url: links::mailto_url(CONTACT_EMAIL, &subject, &body),
            message_key: "contact-tax-success",
            payload: serde_json::json!({
                "subject": subject,
                "body": body,
                "files": self.files,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(key: &str) -> String {
        key.to_string()
    }

    #[test]
    fn only_listed_years_parse() {
        assert_eq!(TaxReturnForm::parse_year("2023"), Some(2023));
        assert_eq!(TaxReturnForm::parse_year("2019"), None);
        assert_eq!(TaxReturnForm::parse_year(""), None);
    }

    #[test]
    fn bsn_is_optional_but_reported() {
        let form = TaxReturnForm {
            full_name: "Jan de Vries".into(),
            email: "jan@example.nl".into(),
            phone: "0201234567".into(),
            tax_year: Some(2024),
            ..TaxReturnForm::default()
        };
        assert!(form.validate().is_empty());
        let body = form.mail_body(&echo);
        assert!(body.contains("summary-bsn: summary-not-provided\n"));
        assert!(body.contains("summary-tax-year: 2024\n"));
        assert!(body.ends_with("mail-body-footer"));
    }

    #[test]
    fn subject_pairs_title_and_name() {
        let form = TaxReturnForm {
            full_name: "Ewa".into(),
            ..TaxReturnForm::default()
        };
        assert_eq!(form.mail_subject(&echo), "contact-tax-title – Ewa");
    }

    #[test]
    fn submission_is_a_mailto_with_files_logged() {
        let form = TaxReturnForm {
            full_name: "Ewa".into(),
            files: vec!["jaaropgave.pdf".into(), "loonstrook.pdf".into()],
            ..TaxReturnForm::default()
        };
        let Submission::MailTo { url, payload, .. } = form.submission(&echo) else {
            panic!("tax returns go out by mail");
        };
        assert!(url.starts_with(&format!("mailto:{CONTACT_EMAIL}?subject=")));
        assert_eq!(payload["files"][1], "loonstrook.pdf");
    }
}
