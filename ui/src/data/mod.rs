//! Static marketing content.
//!
//! Providers take the translator so the structures stay plain data and can be
//! inspected in tests without a loaded locale.

pub mod about;
pub mod slides;
pub mod testimonials;

pub use about::{about_header_images, about_services, stats, ServiceIcon, ServiceItem, Stat};
pub use slides::{slides, CtaVariant, Slide, SlideCta};
pub use testimonials::{testimonials, Testimonial, MAX_RATING};
