use dioxus::prelude::*;

use crate::pages::{self, Page};
use crate::t;

#[component]
pub fn Apply() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-apply",
            h1 { {t!("apply-title")} }
            p { {t!("apply-intro")} }
            ul { class: "page-apply__steps",
                li { {t!("apply-step-1")} }
                li { {t!("apply-step-2")} }
                li { {t!("apply-step-3")} }
            }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| pages::navigate(Page::Contact),
                {t!("apply-cta")}
            }
        }
    }
}
