use dioxus::prelude::*;

use crate::components::rotation::use_rotating_index;
use crate::core::config::HERO_ROTATION_MS;
use crate::data::{slides, Slide};
use crate::i18n::tr;
use crate::pages::{self, Page};
use crate::t;

#[component]
pub fn Home() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    tracing::debug!("[i18n] Home render (lang_marker={lang_current})");

    rsx! {
        div { style: "display:none", "{lang_current}" }
        section { class: "page page-home",
            HeroCarousel { on_navigate: move |page: Page| pages::navigate(page) }
            div { class: "page-home__intro",
                h2 { {t!("home-intro-title")} }
                p { {t!("home-intro-body")} }
            }
        }
    }
}

#[component]
pub fn HeroCarousel(on_navigate: EventHandler<Page>) -> Element {
    let slides = slides(&tr);
    let mut index = use_rotating_index(slides.len(), HERO_ROTATION_MS);
    let current = index() % slides.len().max(1);

    let Some(slide) = slides.get(current).cloned() else {
        return rsx! {};
    };

    rsx! {
        div { class: "hero",
            HeroSlide { key: "{slide.id}", slide, on_navigate }
            div { class: "hero__dots", role: "tablist",
                for i in 0..slides.len() {
                    button {
                        key: "{i}",
                        r#type: "button",
                        class: dot_class(i == current),
                        aria_label: "{i + 1}",
                        onclick: move |_| index.set(i),
                    }
                }
            }
        }
    }
}

fn dot_class(active: bool) -> &'static str {
    if active {
        "hero__dot hero__dot--active"
    } else {
        "hero__dot"
    }
}

#[component]
fn HeroSlide(slide: Slide, on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        div { class: "hero__slide",
            img { class: "hero__image", src: "{slide.image}", alt: "{slide.alt}" }
            div { class: "hero__overlay" }
            div { class: "hero__content",
                h1 { "{slide.title}" }
                p { "{slide.subtitle}" }
                div { class: "hero__ctas",
                    for cta in slide.ctas {
                        button {
                            key: "{cta.label}",
                            r#type: "button",
                            class: cta.variant.class(),
                            onclick: move |_| on_navigate.call(cta.page),
                            "{cta.label}"
                        }
                    }
                }
            }
        }
    }
}
