//! Runtime message ids (error codes, option labels, data providers, summary
//! builders) never pass through `fl!`, so nothing checks them at compile
//! time. These tests record every id those paths request and require each
//! locale to define it.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use crate::data::{about_services, slides, stats, testimonials};
use crate::forms::{
    CallbackForm, ConsultationForm, ConsultationTopic, FieldError, ProjectType, QuoteForm,
    TaxReturnForm,
};
use crate::pages::Page;
use crate::views::ContactTab;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "ella-ui.ftl";

const LOCALES: [&str; 3] = ["en-US", "nl-NL", "pl-PL"];

/// Message ids defined in a Fluent file (`id = value` lines only).
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn locale_keys(locale: &str) -> BTreeSet<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("i18n")
        .join(locale)
        .join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

/// Every id the runtime lookup paths can ask for.
fn runtime_keys() -> BTreeSet<String> {
    let seen = RefCell::new(BTreeSet::new());
    let record = |key: &str| {
        seen.borrow_mut().insert(key.to_string());
        key.to_string()
    };

    slides(&record);
    about_services(&record);
    stats(&record);
    testimonials(&record);

    for topic in ConsultationTopic::ALL {
        let form = ConsultationForm {
            topic: Some(topic),
            ..ConsultationForm::default()
        };
        form.whatsapp_message(&record);
    }
    let consultation = ConsultationForm {
        wants_whats_app: true,
        ..ConsultationForm::default()
    };
    consultation.whatsapp_message(&record);

    let tax = TaxReturnForm {
        joint_return: true,
        ..TaxReturnForm::default()
    };
    tax.mail_subject(&record);
    tax.mail_body(&record);
    TaxReturnForm::default().mail_body(&record);

    let message_keys = [
        QuoteForm::default().submission().message_key(),
        CallbackForm::default().submission().message_key(),
        ConsultationForm::default().submission(&record).message_key(),
        TaxReturnForm::default().submission(&record).message_key(),
    ];

    let mut keys = seen.into_inner();
    keys.extend(message_keys.map(str::to_string));
    keys.extend(FieldError::ALL.iter().map(|e| e.key().to_string()));
    keys.extend(ProjectType::ALL.iter().map(|p| p.label_key().to_string()));
    keys.extend(ConsultationTopic::ALL.iter().map(|t| t.label_key().to_string()));
    keys.extend(ContactTab::ALL.iter().map(|t| t.label_key().to_string()));
    keys.extend(Page::ALL.iter().map(|p| p.label_key().to_string()));
    keys
}

#[test]
fn runtime_keys_exist_in_every_locale() {
    let required = runtime_keys();
    assert!(required.len() > 50, "suspiciously few runtime keys: {}", required.len());

    let mut report = String::new();
    for locale in LOCALES {
        let defined = locale_keys(locale);
        let missing: Vec<_> = required.difference(&defined).cloned().collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {locale} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
    }

    if !report.is_empty() {
        panic!("Runtime translation ids missing:\n{report}");
    }
}

#[test]
fn runtime_keys_follow_fluent_id_rules() {
    for key in runtime_keys() {
        assert!(
            key.chars().all(valid_key_char),
            "`{key}` is not a valid message id"
        );
    }
}
