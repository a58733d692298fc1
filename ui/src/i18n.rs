//! Internationalization (i18n) support for `ella-ui`.
//!
//! This module wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/ella-ui.ftl   (fallback/reference)
//!   nl-NL/ella-ui.ftl
//!   pl-PL/ella-ui.ftl
//! ```
//!
//! Two lookup styles exist:
//! - `t!("contact-tabs-quote")` for literal keys in markup. Keys are checked
//!   against the fallback file at compile time.
//! - `tr(key)` for keys only known at runtime: validation error codes and the
//!   translated fields of the static data providers (`crate::data`).
//!
//! To add a new locale:
//! 1. Copy `en-US/ella-ui.ftl` to `i18n/<lang-id>/ella-ui.ftl`.
//! 2. Translate each message value (keep IDs and variable placeholders identical).
//! 3. Register it in `tests/i18n_missing_keys.rs` and run the tests.
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-home")
///     t!("contact-tax-upload-selected", count = 2)
///
/// This expands to `fl!(&*LOADER, ...)` keeping callsites short while
/// ensuring all lookups route through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
const DOMAIN: &str = "ella-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            tracing::warn!("[i18n] failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Resolve a message id that is only known at runtime.
///
/// Unknown ids come back as the id itself, which keeps a missing translation
/// visible without breaking the page.
pub fn tr(key: &str) -> String {
    init();
    if LOADER.has(key) {
        LOADER.get(key)
    } else {
        tracing::debug!("[i18n] missing message id `{key}`");
        key.to_string()
    }
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// The language currently at the head of the loader's fallback chain.
pub fn current_language() -> String {
    init();
    LOADER.current_language().to_string()
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_language_is_present() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "nl-NL"));
        assert!(langs.iter().any(|l| l == "pl-PL"));
    }

    #[test]
    fn compile_time_and_runtime_domains_agree() {
        // `fl!` reads the domain from i18n.toml; the loader uses DOMAIN.
        let config = include_str!("../i18n.toml");
        assert!(
            config
                .lines()
                .any(|l| l.trim() == format!("domain = \"{DOMAIN}\"")),
            "i18n.toml must set `domain = \"{DOMAIN}\"`"
        );
        for lang in available_languages() {
            let file = format!("{lang}/{DOMAIN}.ftl");
            assert!(
                Localizations::get(&file).is_some(),
                "{file} is not embedded"
            );
        }
    }

    #[test]
    fn runtime_lookup_resolves_known_ids() {
        let s = tr("validation-name-required");
        assert!(!s.is_empty());
        assert_ne!(s, "validation-name-required");
    }

    #[test]
    fn runtime_lookup_echoes_unknown_ids() {
        assert_eq!(tr("definitely-not-a-key"), "definitely-not-a-key");
    }

    #[test]
    fn dynamic_language_switch_ignores_invalid_tags() {
        init();
        let before = tr("nav-home");
        let _ = set_language("not a tag!");
        let after = tr("nav-home");
        assert_eq!(before, after);
    }
}
