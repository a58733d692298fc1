use dioxus::prelude::*;

use crate::components::rotation::use_rotating_index;
use crate::core::config::ABOUT_ROTATION_MS;
use crate::data::{about_header_images, about_services, stats, testimonials, Testimonial};
use crate::i18n::tr;
use crate::pages::{self, Page};
use crate::t;

/// Routed entry point; forwards page requests to the registered router.
#[component]
pub fn About() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        AboutPage { on_navigate: move |page: Page| pages::navigate(page) }
    }
}

#[component]
pub fn AboutPage(on_navigate: EventHandler<Page>) -> Element {
    let images = about_header_images();
    let image_index = use_rotating_index(images.len(), ABOUT_ROTATION_MS);
    let mut active_service = use_signal(|| 0usize);

    let services = about_services(&tr);
    let clients = testimonials(&tr);
    let figures = stats(&tr);

    let header_image = images[image_index() % images.len()];
    let service_image = services
        .get(active_service())
        .map(|s| s.image)
        .unwrap_or_default();

    rsx! {
        div { class: "page page-about",
            section { class: "about-hero",
                img {
                    key: "{header_image}",
                    class: "about-hero__image",
                    src: "{header_image}",
                    alt: t!("about-hero-alt"),
                }
                div { class: "about-hero__overlay" }
                div { class: "about-hero__content",
                    h1 { {t!("about-hero-title")} }
                    p { {t!("about-hero-subtitle")} }
                }
            }

            section { class: "about-stats",
                for (i, stat) in figures.into_iter().enumerate() {
                    div { key: "{i}", class: "stat-card",
                        p { class: "stat-card__value", "{stat.value}" }
                        p { class: "stat-card__label", "{stat.label}" }
                    }
                }
            }

            section { class: "about-who",
                div {
                    h3 { class: "about-who__tag", {t!("about-who-tag")} }
                    h2 { {t!("about-who-title")} }
                    p { {t!("about-who-p1")} }
                }
                div {
                    p { {t!("about-who-p2")} }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| on_navigate.call(Page::Contact),
                        {t!("about-who-button")}
                    }
                }
            }

            section {
                class: "about-services",
                style: "background-image: url('{service_image}')",
                h2 { {t!("about-services-title")} }
                div { class: "about-services__list",
                    for (i, item) in services.into_iter().enumerate() {
                        div {
                            key: "{i}",
                            class: service_class(active_service() == i),
                            onmouseenter: move |_| active_service.set(i),
                            onclick: move |_| active_service.set(i),
                            span { class: "service-card__icon", aria_hidden: "true", "{item.icon.glyph()}" }
                            div {
                                h3 { "{item.title}" }
                                p { "{item.description}" }
                            }
                        }
                    }
                }
            }

            section { class: "about-testimonials",
                h2 { {t!("about-testimonials-title")} }
                div { class: "about-testimonials__grid",
                    for client in clients {
                        TestimonialCard { key: "{client.name}", testimonial: client }
                    }
                }
            }
        }
    }
}

fn service_class(active: bool) -> &'static str {
    if active {
        "service-card service-card--active"
    } else {
        "service-card"
    }
}

fn star_class(filled: bool) -> &'static str {
    if filled {
        "star star--filled"
    } else {
        "star"
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> Element {
    rsx! {
        article { class: "testimonial-card",
            img { class: "testimonial-card__avatar", src: "{testimonial.image}", alt: "{testimonial.name}" }
            div { class: "testimonial-card__rating", aria_label: "{testimonial.rating}/5",
                for (i, filled) in testimonial.stars().enumerate() {
                    span {
                        key: "{i}",
                        class: star_class(filled),
                        "★"
                    }
                }
            }
            h3 { "{testimonial.name}" }
            p { class: "testimonial-card__role", "{testimonial.role}" }
            p { class: "testimonial-card__quote", "{testimonial.quote}" }
        }
    }
}
