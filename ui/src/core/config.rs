//! Compile-time site configuration.
//!
//! Everything the site needs to reach the outside world lives here so the
//! platform crates never have to thread settings through props.

/// Address receiving the tax-return `mailto:` requests.
pub const CONTACT_EMAIL: &str = "info@ella-personnel.nl";

/// International number (digits only) used for `wa.me` deep links.
pub const WHATSAPP_NUMBER: &str = "1234567890";

/// Delay between header image changes on the about page.
pub const ABOUT_ROTATION_MS: u64 = 5_000;

/// Delay between hero slides on the home page.
pub const HERO_ROTATION_MS: u64 = 7_000;

/// Maximum characters for the company name and address inputs.
pub const SHORT_TEXT_LIMIT: usize = 100;

/// Maximum characters for the equipment description.
pub const EQUIPMENT_CHAR_LIMIT: usize = 500;

/// Maximum whitespace-delimited words for the free-text requests.
pub const REQUESTS_WORD_LIMIT: usize = 500;
