use crate::i18n::{self, tr};
use crate::pages::{self, Page};
use crate::t;
use dioxus::prelude::*;

// Navbar stylesheet (inlined as well for release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Site header: brand, localized page links and the locale switcher.
///
/// Links come from the platform's registered [`pages::PageRouter`]; until one
/// is registered the header renders without navigation.
///
/// The language selector updates the shared `Signal<String>` context (when the
/// platform provides one) so routed views re-render with fresh strings.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    tracing::debug!("[i18n] AppNavbar render lang={_lang_marker}");

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!("[i18n] could not switch to {val}: {err}"),
        }
    };

    let links = pages::router().map(|router| {
        Page::ALL
            .into_iter()
            .map(|page| (page, (router.link)(page, &tr(page.label_key()))))
            .collect::<Vec<_>>()
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Ella Personnel Services" }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                if let Some(links) = links {
                    nav { class: "navbar__links",
                        for (page, link) in links {
                            span { key: "{page.slug()}", {link} }
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
