//! Shared UI crate for the Ella Personnel Services site. Forms, content,
//! views and translations live here; the platform crates only add routing.

use dioxus::prelude::*;

/// Shared site theme, linked by the web build.
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

pub mod core;
pub mod data;
pub mod forms;
pub mod i18n;
pub mod pages;
pub mod views;

pub mod components {
    // Localized site header (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    // Labelled inputs with inline validation feedback
    pub mod form_fields;

    // Interval-driven carousel index
    pub mod rotation;
}

#[cfg(test)]
mod tests;
