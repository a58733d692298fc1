use dioxus::prelude::*;

use crate::forms::{ContactForm, FormState};
use crate::i18n;

/// Localized inline message for `field`, if it currently has an error.
pub fn error_message<T: ContactForm>(state: &FormState<T>, field: T::Field) -> Option<String> {
    state.error(field).map(|e| i18n::tr(e.key()))
}

fn control_class(base: &str, error: &Option<String>) -> String {
    if error.is_some() {
        format!("{base} {base}--invalid")
    } else {
        base.to_string()
    }
}

#[component]
fn FieldLabel(id: String, label: String, required: bool) -> Element {
    rsx! {
        label { class: "form-field__label", r#for: "{id}",
            "{label}"
            if required {
                span { class: "form-field__required", aria_hidden: "true", " *" }
            }
        }
    }
}

/// Hint under a control; replaced by the error once one is present.
#[component]
fn FieldFeedback(hint: Option<String>, error: Option<String>) -> Element {
    rsx! {
        if let Some(err) = error {
            p { class: "form-field__error", role: "alert", "{err}" }
        } else if let Some(hint) = hint {
            p { class: "form-field__hint", "{hint}" }
        }
    }
}

#[component]
pub fn FormInput(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    hint: Option<String>,
    error: Option<String>,
) -> Element {
    let class = control_class("form-field__control", &error);
    let invalid = error.is_some();
    rsx! {
        div { class: "form-field",
            FieldLabel { id: id.clone(), label, required }
            input {
                id: "{id}",
                name: "{id}",
                r#type: "{input_type}",
                class: "{class}",
                placeholder: "{placeholder}",
                value: "{value}",
                aria_invalid: invalid,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            FieldFeedback { hint, error }
        }
    }
}

#[component]
pub fn FormTextarea(
    id: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
    hint: Option<String>,
    error: Option<String>,
) -> Element {
    let class = control_class("form-field__control form-field__control--area", &error);
    let invalid = error.is_some();
    rsx! {
        div { class: "form-field",
            FieldLabel { id: id.clone(), label, required }
            textarea {
                id: "{id}",
                name: "{id}",
                rows: 5,
                class: "{class}",
                placeholder: "{placeholder}",
                value: "{value}",
                aria_invalid: invalid,
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            FieldFeedback { hint, error }
        }
    }
}

#[component]
pub fn FormCheckbox(
    id: String,
    label: String,
    checked: bool,
    onchange: EventHandler<bool>,
    error: Option<String>,
) -> Element {
    rsx! {
        div { class: "form-field form-field--inline",
            input {
                id: "{id}",
                name: "{id}",
                r#type: "checkbox",
                class: "form-field__checkbox",
                checked,
                oninput: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            label { class: "form-field__label", r#for: "{id}", "{label}" }
            FieldFeedback { error }
        }
    }
}

/// One `<option>` of a [`FormSelect`]: submitted value and display label.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[component]
pub fn FormSelect(
    id: String,
    label: String,
    value: String,
    placeholder: String,
    options: Vec<SelectOption>,
    onchange: EventHandler<String>,
    #[props(default)] required: bool,
    error: Option<String>,
) -> Element {
    let class = control_class("form-field__control", &error);
    rsx! {
        div { class: "form-field",
            FieldLabel { id: id.clone(), label, required }
            select {
                id: "{id}",
                name: "{id}",
                class: "{class}",
                value: "{value}",
                oninput: move |evt: FormEvent| onchange.call(evt.value()),
                option { value: "", "{placeholder}" }
                for opt in options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == value,
                        "{opt.label}"
                    }
                }
            }
            FieldFeedback { error }
        }
    }
}

/// File picker reporting the chosen file names.
#[component]
pub fn FilePicker(
    id: String,
    label: String,
    button_label: String,
    #[props(default)] multiple: bool,
    onchange: EventHandler<Vec<String>>,
) -> Element {
    rsx! {
        div { class: "form-field",
            span { class: "form-field__label", "{label}" }
            label { class: "form-field__file", r#for: "{id}", "{button_label}" }
            input {
                id: "{id}",
                name: "{id}",
                r#type: "file",
                class: "visually-hidden",
                multiple,
                onchange: move |evt: FormEvent| {
                    let names = evt.files().map(|engine| engine.files()).unwrap_or_default();
                    onchange.call(names);
                },
            }
        }
    }
}
