mod about;
pub use about::{About, AboutPage};

mod apply;
pub use apply::Apply;

mod contact;
pub use contact::{Contact, ContactTab};

mod home;
pub use home::{HeroCarousel, Home};

mod services;
pub use services::Services;
