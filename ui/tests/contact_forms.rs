//! Behaviour of the four contact forms as seen through `FormState`, the same
//! path the contact tabs drive: edit fields, submit, read inline errors.

use ui::core::effects::Submission;
use ui::forms::{
    CallbackField, CallbackForm, ConsultationField, ConsultationForm, ConsultationTopic,
    ContactForm, FieldError, FormState, ProjectType, QuoteField, QuoteForm, TaxReturnField,
    TaxReturnForm,
};

fn echo(key: &str) -> String {
    key.to_string()
}

fn valid_quote() -> QuoteForm {
    QuoteForm {
        name: "Jan".into(),
        company_name: "Acme".into(),
        email: "a@b.com".into(),
        confirm_email: "a@b.com".into(),
        phone_number: "123".into(),
        address: "Main St 1".into(),
        project_type: ProjectType::from_value("Woningbouw"),
        start_date: "2025-03-01".into(),
        end_date: "2025-06-30".into(),
        equipment: "crane".into(),
        requests: String::new(),
        privacy: true,
    }
}

fn valid_consultation() -> ConsultationForm {
    ConsultationForm {
        full_name: "Anna Kowalska".into(),
        email: "anna@example.pl".into(),
        phone: "+48 600 000 000".into(),
        topic: Some(ConsultationTopic::Tax),
        ..ConsultationForm::default()
    }
}

fn valid_tax_return() -> TaxReturnForm {
    TaxReturnForm {
        full_name: "Jan de Vries".into(),
        email: "jan@example.nl".into(),
        phone: "0201234567".into(),
        tax_year: Some(2024),
        ..TaxReturnForm::default()
    }
}

fn valid_callback() -> CallbackForm {
    CallbackForm {
        name: "Piet".into(),
        company_name: "Bouw BV".into(),
        phone_number: "0612345678".into(),
    }
}

fn state_with<T: ContactForm>(data: T) -> FormState<T> {
    FormState {
        data,
        ..FormState::new()
    }
}

#[test]
fn example_quote_passes_validation() {
    let mut state = state_with(valid_quote());
    assert!(state.submit());
    assert!(state.errors.is_empty());
}

#[test]
fn every_valid_form_submits() {
    assert!(state_with(valid_quote()).submit());
    assert!(state_with(valid_callback()).submit());
    assert!(state_with(valid_consultation()).submit());
    assert!(state_with(valid_tax_return()).submit());
}

#[test]
fn blanking_any_required_quote_field_blocks_submission() {
    type Blank = fn(&mut QuoteForm);
    let cases: [(QuoteField, Blank); 10] = [
        (QuoteField::Name, |f| f.name.clear()),
        (QuoteField::CompanyName, |f| f.company_name.clear()),
        (QuoteField::Email, |f| f.email.clear()),
        (QuoteField::PhoneNumber, |f| f.phone_number.clear()),
        (QuoteField::Address, |f| f.address.clear()),
        (QuoteField::ProjectType, |f| f.project_type = None),
        (QuoteField::StartDate, |f| f.start_date.clear()),
        (QuoteField::EndDate, |f| f.end_date.clear()),
        (QuoteField::Equipment, |f| f.equipment.clear()),
        (QuoteField::Privacy, |f| f.privacy = false),
    ];
    for (field, blank) in cases {
        let mut form = valid_quote();
        blank(&mut form);
        let mut state = state_with(form);
        assert!(!state.submit(), "{field:?} left empty still submitted");
        assert!(state.error(field).is_some(), "{field:?} has no inline error");
    }
}

#[test]
fn blanking_any_required_callback_field_blocks_submission() {
    type Blank = fn(&mut CallbackForm);
    let cases: [(CallbackField, Blank); 3] = [
        (CallbackField::Name, |f| f.name.clear()),
        (CallbackField::CompanyName, |f| f.company_name.clear()),
        (CallbackField::PhoneNumber, |f| f.phone_number.clear()),
    ];
    for (field, blank) in cases {
        let mut form = valid_callback();
        blank(&mut form);
        let mut state = state_with(form);
        assert!(!state.submit());
        assert!(state.error(field).is_some(), "{field:?} has no inline error");
    }
}

#[test]
fn blanking_any_required_consultation_field_blocks_submission() {
    type Blank = fn(&mut ConsultationForm);
    let cases: [(ConsultationField, Blank); 4] = [
        (ConsultationField::FullName, |f| f.full_name.clear()),
        (ConsultationField::Email, |f| f.email.clear()),
        (ConsultationField::Phone, |f| f.phone.clear()),
        (ConsultationField::Topic, |f| f.topic = None),
    ];
    for (field, blank) in cases {
        let mut form = valid_consultation();
        blank(&mut form);
        let mut state = state_with(form);
        assert!(!state.submit());
        assert!(state.error(field).is_some(), "{field:?} has no inline error");
    }
}

#[test]
fn blanking_any_required_tax_field_blocks_submission() {
    type Blank = fn(&mut TaxReturnForm);
    let cases: [(TaxReturnField, Blank); 4] = [
        (TaxReturnField::FullName, |f| f.full_name.clear()),
        (TaxReturnField::Email, |f| f.email.clear()),
        (TaxReturnField::Phone, |f| f.phone.clear()),
        (TaxReturnField::TaxYear, |f| f.tax_year = None),
    ];
    for (field, blank) in cases {
        let mut form = valid_tax_return();
        blank(&mut form);
        let mut state = state_with(form);
        assert!(!state.submit());
        assert!(state.error(field).is_some(), "{field:?} has no inline error");
    }
}

#[test]
fn confirm_email_must_match_exactly() {
    let mut form = valid_quote();
    form.confirm_email = "A@b.com".into();
    let mut state = state_with(form);
    assert!(!state.submit());
    assert_eq!(
        state.error(QuoteField::ConfirmEmail),
        Some(FieldError::EmailMismatch)
    );

    state.edit(QuoteField::ConfirmEmail, |f| f.confirm_email = "a@b.com".into());
    assert!(state.submit());
    assert_eq!(state.error(QuoteField::ConfirmEmail), None);
}

#[test]
fn malformed_email_is_reported_separately_from_missing() {
    let mut form = valid_quote();
    form.email = "not-an-email".into();
    form.confirm_email = "not-an-email".into();
    let mut state = state_with(form);
    assert!(!state.submit());
    assert_eq!(state.error(QuoteField::Email), Some(FieldError::EmailInvalid));
    assert_eq!(state.error(QuoteField::ConfirmEmail), None);
}

#[test]
fn equipment_limit_is_inclusive() {
    let mut form = valid_quote();
    form.equipment = "x".repeat(500);
    assert!(form.validate().is_empty());

    form.equipment.push('x');
    assert_eq!(
        form.validate().get(QuoteField::Equipment),
        Some(FieldError::EquipmentLimit)
    );
}

#[test]
fn requests_limit_counts_words_not_characters() {
    let mut form = valid_quote();
    form.requests = vec!["word"; 500].join(" ");
    assert!(form.validate().is_empty());

    form.requests.push_str("  \n one-more");
    assert_eq!(
        form.validate().get(QuoteField::Requests),
        Some(FieldError::RequestsLimit)
    );

    // One long token is a single word.
    form.requests = "y".repeat(5_000);
    assert!(form.validate().is_empty());
}

#[test]
fn short_text_limits_override_required() {
    let mut form = valid_quote();
    form.company_name = "c".repeat(101);
    form.address = "a".repeat(101);
    let errors = form.validate();
    assert_eq!(
        errors.get(QuoteField::CompanyName),
        Some(FieldError::CompanyNameLimit)
    );
    assert_eq!(errors.get(QuoteField::Address), Some(FieldError::AddressLimit));

    form.company_name = "ł".repeat(100);
    assert!(!form.validate().contains(QuoteField::CompanyName));
}

#[test]
fn other_topic_needs_elaboration_and_nothing_else_does() {
    let mut form = valid_consultation();
    form.topic = Some(ConsultationTopic::Other);
    assert_eq!(
        form.validate().get(ConsultationField::OtherTopic),
        Some(FieldError::OtherTopicRequired)
    );

    form.other_topic = "Pension transfer".into();
    assert!(form.validate().is_empty());

    for topic in ConsultationTopic::ALL
        .into_iter()
        .filter(|t| !t.needs_elaboration())
    {
        form.topic = Some(topic);
        form.other_topic.clear();
        assert!(form.validate().is_empty(), "{topic:?} asked for elaboration");
    }
    assert_eq!(
        ConsultationTopic::from_value("other"),
        Some(ConsultationTopic::Other)
    );
}

#[test]
fn editing_a_field_clears_its_error_even_when_still_invalid() {
    let mut state = FormState::<QuoteForm>::new();
    assert!(!state.submit());
    assert!(state.error(QuoteField::Email).is_some());
    assert!(state.error(QuoteField::Name).is_some());

    state.edit(QuoteField::Email, |f| f.email = "still-bad".into());
    assert_eq!(state.error(QuoteField::Email), None);
    // Other fields keep their errors until they change or the form is resubmitted.
    assert!(state.error(QuoteField::Name).is_some());

    assert!(!state.submit());
    assert_eq!(state.error(QuoteField::Email), Some(FieldError::EmailInvalid));
}

#[test]
fn clearing_errors_works_the_same_on_every_form() {
    let mut callback = FormState::<CallbackForm>::new();
    callback.submit();
    callback.edit(CallbackField::Name, |f| f.name.clear());
    assert_eq!(callback.error(CallbackField::Name), None);

    let mut consultation = FormState::<ConsultationForm>::new();
    consultation.submit();
    consultation.edit(ConsultationField::Topic, |f| {
        f.topic = ConsultationTopic::from_value("")
    });
    assert_eq!(consultation.error(ConsultationField::Topic), None);

    let mut tax = FormState::<TaxReturnForm>::new();
    tax.submit();
    tax.edit(TaxReturnField::TaxYear, |f| {
        f.tax_year = TaxReturnForm::parse_year("1999")
    });
    assert_eq!(tax.error(TaxReturnField::TaxYear), None);
}

#[test]
fn reset_returns_to_empty_defaults() {
    let mut state = state_with(valid_callback());
    state.submit();
    state.reset();
    assert_eq!(state, FormState::new());
}

#[test]
fn consultation_goes_out_as_a_whatsapp_link() {
    let mut form = valid_consultation();
    form.topic = Some(ConsultationTopic::Other);
    form.other_topic = "Pension & savings".into();

    let submission = form.submission(&echo);
    let url = submission.url().expect("whatsapp submissions carry a url");
    assert!(url.starts_with("https://wa.me/"));
    assert!(url.contains("?text="));
    // Elaboration replaces the topic label and is percent-encoded.
    assert!(url.contains("Pension%20%26%20savings"));
    assert!(!url.contains("consultation-topic-other"));
    assert_eq!(submission.message_key(), "contact-consultation-success");
}

#[test]
fn tax_return_goes_out_as_a_mailto_link() {
    let form = valid_tax_return();
    let submission = form.submission(&echo);
    assert!(matches!(submission, Submission::MailTo { .. }));
    let url = submission.url().expect("mail submissions carry a url");
    assert!(url.starts_with("mailto:"));
    assert!(url.contains("&body="));
    assert_eq!(submission.message_key(), "contact-tax-success");
}

#[test]
fn quote_and_callback_only_notify() {
    assert_eq!(valid_quote().submission().url(), None);
    assert_eq!(valid_callback().submission().url(), None);
}
