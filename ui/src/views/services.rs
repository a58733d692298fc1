use dioxus::prelude::*;

use crate::data::about_services;
use crate::i18n::tr;
use crate::pages::{self, Page};
use crate::t;

#[component]
pub fn Services() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let services = about_services(&tr);

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-services",
            h1 { {t!("services-title")} }
            p { {t!("services-intro")} }
            div { class: "services-grid",
                for (i, item) in services.into_iter().enumerate() {
                    article { key: "{i}", class: "service-tile",
                        img { class: "service-tile__image", src: "{item.image}", alt: "{item.title}" }
                        span { class: "service-card__icon", aria_hidden: "true", "{item.icon.glyph()}" }
                        h2 { "{item.title}" }
                        p { "{item.description}" }
                    }
                }
            }
            button {
                r#type: "button",
                class: "button button--primary",
                onclick: move |_| pages::navigate(Page::Contact),
                {t!("services-cta")}
            }
        }
    }
}
