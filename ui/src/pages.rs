//! Site-level navigation targets.
//!
//! Views never see a platform's `Route` enum. They request a page through an
//! `EventHandler<Page>` and the platform crate maps it onto its router.

use dioxus::prelude::Element;
use once_cell::sync::OnceCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Apply,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Apply,
        Page::Contact,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Services => "services",
            Page::Apply => "apply",
            Page::Contact => "contact",
        }
    }

    /// Navbar label.
    pub fn label_key(self) -> &'static str {
        match self {
            Page::Home => "nav-home",
            Page::About => "nav-about",
            Page::Services => "nav-services",
            Page::Apply => "nav-apply",
            Page::Contact => "nav-contact",
        }
    }
}

/// Platform hooks for leaving the current page.
///
/// `ui` cannot name a platform's `Route` enum, so each platform crate
/// registers plain functions that know how to reach a [`Page`]:
/// ```ignore
/// register_router(PageRouter {
///     goto: |page| { navigator().push(Route::from(page)); },
///     link: |page, label| rsx!( Link { class: "navbar__link", to: Route::from(page), "{label}" } ),
/// });
/// ```
pub struct PageRouter {
    /// Imperative navigation, used by buttons and carousel CTAs.
    pub goto: fn(Page),
    /// A link element whose only child is `label`, used by the navbar.
    pub link: fn(page: Page, label: &str) -> Element,
}

static PAGE_ROUTER: OnceCell<PageRouter> = OnceCell::new();

pub fn register_router(router: PageRouter) {
    let _ = PAGE_ROUTER.set(router);
}

pub(crate) fn router() -> Option<&'static PageRouter> {
    PAGE_ROUTER.get()
}

/// Request a page switch. Without a registered router this only logs.
pub fn navigate(page: Page) {
    match PAGE_ROUTER.get() {
        Some(router) => (router.goto)(page),
        None => tracing::warn!(page = page.slug(), "navigation requested without a router"),
    }
}
