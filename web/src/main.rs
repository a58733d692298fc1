use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::i18n;
use ui::pages::{register_router, Page, PageRouter};
use ui::views::{About, Apply, Contact, Home, Services};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/services")]
    Services {},
    #[route("/apply")]
    Apply {},
    #[route("/contact")]
    Contact {},
}

impl From<Page> for Route {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => Route::Home {},
            Page::About => Route::About {},
            Page::Services => Route::Services {},
            Page::Apply => Route::Apply {},
            Page::Contact => Route::Contact {},
        }
    }
}

fn goto(page: Page) {
    navigator().push(Route::from(page));
}

fn nav_link(page: Page, label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "active",
        to: Route::from(page),
        "{label}"
    })
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting web build");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();
    register_router(PageRouter {
        goto,
        link: nav_link,
    });

    let lang_code = use_signal(i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Ella Personnel Services" }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        // Remount routed views on language change so every string is re-resolved.
        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared header above the active route.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
