use dioxus::prelude::*;

use crate::components::form_fields::{
    error_message, FilePicker, FormCheckbox, FormInput, FormSelect, FormTextarea, SelectOption,
};
use crate::core::effects;
use crate::forms::{
    CallbackField, CallbackForm, ConsultationField, ConsultationForm, ConsultationTopic,
    FormState, ProjectType, QuoteField, QuoteForm, TaxReturnField, TaxReturnForm, TAX_YEARS,
};
use crate::i18n::{self, tr};
use crate::t;

/// Which of the four forms is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactTab {
    #[default]
    Quote,
    Consultation,
    Callback,
    Tax,
}

impl ContactTab {
    pub const ALL: [ContactTab; 4] = [
        ContactTab::Quote,
        ContactTab::Consultation,
        ContactTab::Callback,
        ContactTab::Tax,
    ];

    pub fn label_key(self) -> &'static str {
        match self {
            ContactTab::Quote => "contact-tabs-quote",
            ContactTab::Consultation => "contact-tabs-consultation",
            ContactTab::Callback => "contact-tabs-callback",
            ContactTab::Tax => "contact-tabs-tax",
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let mut active = use_signal(ContactTab::default);

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-contact",
            h1 { {t!("contact-main-title")} }
            p { {t!("contact-main-subtitle")} }

            div { class: "contact-tabs", role: "tablist",
                for tab in ContactTab::ALL {
                    button {
                        key: "{tab.label_key()}",
                        r#type: "button",
                        role: "tab",
                        aria_selected: active() == tab,
                        class: tab_class(active() == tab),
                        onclick: move |_| active.set(tab),
                        {tr(tab.label_key())}
                    }
                }
            }

            // Each form owns its state, so switching tabs discards it.
            {
                match active() {
                    ContactTab::Quote => rsx! { QuoteRequestForm {} },
                    ContactTab::Consultation => rsx! { ConsultationRequestForm {} },
                    ContactTab::Callback => rsx! { CallbackRequestForm {} },
                    ContactTab::Tax => rsx! { TaxReturnRequestForm {} },
                }
            }
        }
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "contact-tabs__tab contact-tabs__tab--active"
    } else {
        "contact-tabs__tab"
    }
}

#[component]
fn QuoteRequestForm() -> Element {
    let mut state = use_signal(FormState::<QuoteForm>::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.write().submit() {
            effects::perform(&state.read().data.submission());
        } else {
            tracing::debug!(errors = state.read().errors.len(), "quote form rejected");
        }
    };

    let s = state();
    let data = &s.data;
    let selected_type = data.project_type;
    let project_type_error = error_message(&s, QuoteField::ProjectType);

    rsx! {
        form { class: "contact-form", novalidate: true, onsubmit: on_submit,
            div { class: "contact-form__row",
                FormInput {
                    id: "name", label: t!("contact-form-name"), placeholder: t!("contact-form-name-placeholder"),
                    value: data.name.clone(), required: true,
                    error: error_message(&s, QuoteField::Name),
                    oninput: move |v: String| state.write().edit(QuoteField::Name, |d| d.name = v),
                }
                FormInput {
                    id: "companyName", label: t!("contact-form-company-name"), placeholder: t!("contact-form-company-name-placeholder"),
                    value: data.company_name.clone(), required: true,
                    hint: t!("contact-form-company-name-hint"),
                    error: error_message(&s, QuoteField::CompanyName),
                    oninput: move |v: String| state.write().edit(QuoteField::CompanyName, |d| d.company_name = v),
                }
            }
            div { class: "contact-form__row",
                FormInput {
                    id: "email", input_type: "email", label: t!("contact-form-email"), placeholder: t!("contact-form-email-placeholder"),
                    value: data.email.clone(), required: true,
                    error: error_message(&s, QuoteField::Email),
                    oninput: move |v: String| state.write().edit(QuoteField::Email, |d| d.email = v),
                }
                FormInput {
                    id: "confirmEmail", input_type: "email", label: t!("contact-form-confirm-email"), placeholder: t!("contact-form-confirm-email-placeholder"),
                    value: data.confirm_email.clone(), required: true,
                    error: error_message(&s, QuoteField::ConfirmEmail),
                    oninput: move |v: String| state.write().edit(QuoteField::ConfirmEmail, |d| d.confirm_email = v),
                }
            }
            div { class: "contact-form__row",
                FormInput {
                    id: "phoneNumber", input_type: "tel", label: t!("contact-form-phone"), placeholder: t!("contact-form-phone-placeholder"),
                    value: data.phone_number.clone(), required: true,
                    error: error_message(&s, QuoteField::PhoneNumber),
                    oninput: move |v: String| state.write().edit(QuoteField::PhoneNumber, |d| d.phone_number = v),
                }
                FormInput {
                    id: "address", label: t!("contact-form-address"), placeholder: t!("contact-form-address-placeholder"),
                    value: data.address.clone(), required: true,
                    hint: t!("contact-form-address-hint"),
                    error: error_message(&s, QuoteField::Address),
                    oninput: move |v: String| state.write().edit(QuoteField::Address, |d| d.address = v),
                }
            }

            fieldset { class: "form-field contact-form__project-types",
                legend { class: "form-field__label",
                    {t!("contact-form-project-type")}
                    span { class: "form-field__required", aria_hidden: "true", " *" }
                }
                div { class: "contact-form__radios",
                    for project in ProjectType::ALL {
                        div { key: "{project.value()}", class: "form-field--inline",
                            input {
                                id: "project-{project.value()}",
                                r#type: "radio",
                                name: "projectType",
                                value: "{project.value()}",
                                checked: selected_type == Some(project),
                                oninput: move |_| state.write().edit(QuoteField::ProjectType, |d| d.project_type = Some(project)),
                            }
                            label { r#for: "project-{project.value()}", {tr(project.label_key())} }
                        }
                    }
                }
                if let Some(err) = project_type_error {
                    p { class: "form-field__error", role: "alert", "{err}" }
                }
            }

            div { class: "contact-form__row",
                FormInput {
                    id: "startDate", input_type: "date", label: t!("contact-form-start-date"),
                    value: data.start_date.clone(), required: true,
                    error: error_message(&s, QuoteField::StartDate),
                    oninput: move |v: String| state.write().edit(QuoteField::StartDate, |d| d.start_date = v),
                }
                FormInput {
                    id: "endDate", input_type: "date", label: t!("contact-form-end-date"),
                    value: data.end_date.clone(), required: true,
                    error: error_message(&s, QuoteField::EndDate),
                    oninput: move |v: String| state.write().edit(QuoteField::EndDate, |d| d.end_date = v),
                }
            }

            FormTextarea {
                id: "equipment", label: t!("contact-form-equipment"), placeholder: t!("contact-form-equipment-placeholder"),
                value: data.equipment.clone(), required: true,
                hint: t!("contact-form-equipment-hint"),
                error: error_message(&s, QuoteField::Equipment),
                oninput: move |v: String| state.write().edit(QuoteField::Equipment, |d| d.equipment = v),
            }
            FormTextarea {
                id: "requests", label: t!("contact-form-requests"), placeholder: t!("contact-form-requests-placeholder"),
                value: data.requests.clone(),
                hint: t!("contact-form-requests-hint"),
                error: error_message(&s, QuoteField::Requests),
                oninput: move |v: String| state.write().edit(QuoteField::Requests, |d| d.requests = v),
            }

            FormCheckbox {
                id: "privacy", label: t!("contact-form-privacy"),
                checked: data.privacy,
                error: error_message(&s, QuoteField::Privacy),
                onchange: move |v: bool| state.write().edit(QuoteField::Privacy, |d| d.privacy = v),
            }

            button { r#type: "submit", class: "button button--primary", {t!("contact-form-submit")} }
        }
    }
}

#[component]
fn CallbackRequestForm() -> Element {
    let mut state = use_signal(FormState::<CallbackForm>::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.write().submit() {
            effects::perform(&state.read().data.submission());
            state.write().reset();
        }
    };

    let s = state();
    let data = &s.data;

    rsx! {
        form { class: "contact-form contact-form--narrow", novalidate: true, onsubmit: on_submit,
            p { class: "contact-form__intro", {t!("contact-callback-subtitle")} }
            FormInput {
                id: "callbackName", label: t!("contact-form-name"), placeholder: t!("contact-form-name-placeholder"),
                value: data.name.clone(), required: true,
                error: error_message(&s, CallbackField::Name),
                oninput: move |v: String| state.write().edit(CallbackField::Name, |d| d.name = v),
            }
            FormInput {
                id: "callbackCompanyName", label: t!("contact-form-company-name"), placeholder: t!("contact-form-company-name-placeholder"),
                value: data.company_name.clone(), required: true,
                error: error_message(&s, CallbackField::CompanyName),
                oninput: move |v: String| state.write().edit(CallbackField::CompanyName, |d| d.company_name = v),
            }
            FormInput {
                id: "callbackPhoneNumber", input_type: "tel", label: t!("contact-form-phone"), placeholder: t!("contact-form-phone-placeholder"),
                value: data.phone_number.clone(), required: true,
                error: error_message(&s, CallbackField::PhoneNumber),
                oninput: move |v: String| state.write().edit(CallbackField::PhoneNumber, |d| d.phone_number = v),
            }
            button { r#type: "submit", class: "button button--primary", {t!("contact-callback-submit")} }
        }
    }
}

#[component]
fn ConsultationRequestForm() -> Element {
    let mut state = use_signal(FormState::<ConsultationForm>::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.write().submit() {
            effects::perform(&state.read().data.submission(&i18n::tr));
            state.write().reset();
        }
    };

    let s = state();
    let data = &s.data;
    let topic_options: Vec<SelectOption> = ConsultationTopic::ALL
        .into_iter()
        .map(|topic| SelectOption {
            value: topic.value().to_string(),
            label: tr(topic.label_key()),
        })
        .collect();
    let topic_value = data.topic.map(|t| t.value().to_string()).unwrap_or_default();
    let needs_elaboration = data.topic.is_some_and(|t| t.needs_elaboration());
    let attachment_label = data
        .attachment
        .clone()
        .unwrap_or_else(|| t!("contact-consultation-attachment-select"));

    rsx! {
        form { class: "contact-form", novalidate: true, onsubmit: on_submit,
            FormInput {
                id: "fullName", label: t!("contact-consultation-full-name"), placeholder: t!("contact-consultation-full-name-placeholder"),
                value: data.full_name.clone(), required: true,
                error: error_message(&s, ConsultationField::FullName),
                oninput: move |v: String| state.write().edit(ConsultationField::FullName, |d| d.full_name = v),
            }
            FormInput {
                id: "email", input_type: "email", label: t!("contact-form-email"), placeholder: t!("contact-form-email-placeholder"),
                value: data.email.clone(), required: true,
                error: error_message(&s, ConsultationField::Email),
                oninput: move |v: String| state.write().edit(ConsultationField::Email, |d| d.email = v),
            }
            FormInput {
                id: "phone", input_type: "tel", label: t!("contact-form-phone"), placeholder: t!("contact-consultation-phone-placeholder"),
                value: data.phone.clone(), required: true,
                error: error_message(&s, ConsultationField::Phone),
                oninput: move |v: String| state.write().edit(ConsultationField::Phone, |d| d.phone = v),
            }
            FormCheckbox {
                id: "wantsWhatsApp", label: t!("contact-consultation-whatsapp"),
                checked: data.wants_whats_app,
                onchange: move |v: bool| state.write().edit(ConsultationField::WantsWhatsApp, |d| d.wants_whats_app = v),
            }
            FormSelect {
                id: "topic", label: t!("contact-consultation-topic"), placeholder: t!("contact-consultation-topic-placeholder"),
                value: topic_value, options: topic_options, required: true,
                error: error_message(&s, ConsultationField::Topic),
                onchange: move |v: String| state.write().edit(ConsultationField::Topic, |d| d.topic = ConsultationTopic::from_value(&v)),
            }
            if needs_elaboration {
                FormInput {
                    id: "otherTopic", label: t!("contact-consultation-other-topic"), placeholder: t!("contact-consultation-other-topic-placeholder"),
                    value: data.other_topic.clone(), required: true,
                    error: error_message(&s, ConsultationField::OtherTopic),
                    oninput: move |v: String| state.write().edit(ConsultationField::OtherTopic, |d| d.other_topic = v),
                }
            }
            FormTextarea {
                id: "description", label: t!("contact-consultation-description"), placeholder: t!("contact-consultation-description-placeholder"),
                value: data.description.clone(),
                oninput: move |v: String| state.write().edit(ConsultationField::Description, |d| d.description = v),
            }
            FilePicker {
                id: "attachment", label: t!("contact-consultation-attachment"),
                button_label: attachment_label,
                onchange: move |names: Vec<String>| state.write().edit(ConsultationField::Attachment, |d| d.attachment = names.into_iter().next()),
            }
            button { r#type: "submit", class: "button button--primary", {t!("contact-consultation-submit")} }
        }
    }
}

#[component]
fn TaxReturnRequestForm() -> Element {
    let mut state = use_signal(FormState::<TaxReturnForm>::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if state.write().submit() {
            effects::perform(&state.read().data.submission(&i18n::tr));
            state.write().reset();
        }
    };

    let s = state();
    let data = &s.data;
    let year_options: Vec<SelectOption> = TAX_YEARS
        .iter()
        .map(|y| SelectOption {
            value: y.to_string(),
            label: y.to_string(),
        })
        .collect();
    let year_value = data.tax_year.map(|y| y.to_string()).unwrap_or_default();
    let file_count = data.files.len();
    let upload_label = if file_count == 0 {
        t!("contact-tax-upload-select")
    } else {
        t!("contact-tax-upload-selected", count = file_count)
    };

    rsx! {
        form { class: "contact-form", novalidate: true, onsubmit: on_submit,
            p { class: "contact-form__intro", {t!("contact-tax-subtitle")} }
            FormInput {
                id: "taxFullName", label: t!("contact-consultation-full-name"), placeholder: t!("contact-consultation-full-name-placeholder"),
                value: data.full_name.clone(), required: true,
                error: error_message(&s, TaxReturnField::FullName),
                oninput: move |v: String| state.write().edit(TaxReturnField::FullName, |d| d.full_name = v),
            }
            FormInput {
                id: "bsn", label: t!("contact-tax-bsn"), placeholder: t!("contact-tax-bsn-placeholder"),
                value: data.bsn.clone(),
                oninput: move |v: String| state.write().edit(TaxReturnField::Bsn, |d| d.bsn = v),
            }
            div { class: "contact-form__row",
                FormInput {
                    id: "taxEmail", input_type: "email", label: t!("contact-form-email"), placeholder: t!("contact-form-email-placeholder"),
                    value: data.email.clone(), required: true,
                    error: error_message(&s, TaxReturnField::Email),
                    oninput: move |v: String| state.write().edit(TaxReturnField::Email, |d| d.email = v),
                }
                FormInput {
                    id: "taxPhone", input_type: "tel", label: t!("contact-tax-phone"), placeholder: t!("contact-form-phone-placeholder"),
                    value: data.phone.clone(), required: true,
                    error: error_message(&s, TaxReturnField::Phone),
                    oninput: move |v: String| state.write().edit(TaxReturnField::Phone, |d| d.phone = v),
                }
            }
            FormSelect {
                id: "taxYear", label: t!("contact-tax-year"), placeholder: t!("contact-tax-year-placeholder"),
                value: year_value, options: year_options, required: true,
                error: error_message(&s, TaxReturnField::TaxYear),
                onchange: move |v: String| state.write().edit(TaxReturnField::TaxYear, |d| d.tax_year = TaxReturnForm::parse_year(&v)),
            }
            FilePicker {
                id: "taxFiles", label: t!("contact-tax-upload"),
                button_label: upload_label, multiple: true,
                onchange: move |names: Vec<String>| state.write().edit(TaxReturnField::Files, |d| d.files = names),
            }
            FormCheckbox {
                id: "jointReturn", label: t!("contact-tax-joint-return"),
                checked: data.joint_return,
                onchange: move |v: bool| state.write().edit(TaxReturnField::JointReturn, |d| d.joint_return = v),
            }
            button { r#type: "submit", class: "button button--primary", {t!("contact-tax-submit")} }
        }
    }
}
