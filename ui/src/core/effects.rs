//! What a successful form submission does to the outside world.
//!
//! Forms only *describe* their outcome as a [`Submission`]; [`perform`] is the
//! single place that touches the browser. Keeping the two apart lets the
//! validation tests assert that an invalid form produces no submission at all.

use serde_json::Value;

use super::platform::{self, EffectError};
use crate::i18n;

#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Log the payload and confirm with an alert.
    Notify {
        form: &'static str,
        message_key: &'static str,
        payload: Value,
    },
    /// Open a WhatsApp deep link in a new browsing context, then confirm.
    OpenWhatsApp {
        url: String,
        message_key: &'static str,
    },
    /// Log the payload, hand a prefilled mail to the mail client, then confirm.
    MailTo {
        url: String,
        message_key: &'static str,
        payload: Value,
    },
}

impl Submission {
    pub fn message_key(&self) -> &'static str {
        match self {
            Submission::Notify { message_key, .. }
            | Submission::OpenWhatsApp { message_key, .. }
            | Submission::MailTo { message_key, .. } => message_key,
        }
    }

    /// The outbound URL, if this submission leaves the page.
    pub fn url(&self) -> Option<&str> {
        match self {
            Submission::Notify { .. } => None,
            Submission::OpenWhatsApp { url, .. } | Submission::MailTo { url, .. } => Some(url),
        }
    }
}

/// The browser calls a submission needs.
pub trait Browser {
    fn alert(&self, message: &str) -> Result<(), EffectError>;
    fn open_in_new_context(&self, url: &str) -> Result<(), EffectError>;
    fn navigate_to(&self, url: &str) -> Result<(), EffectError>;
}

/// The real browser (or webview) the app runs in.
pub struct Platform;

impl Browser for Platform {
    fn alert(&self, message: &str) -> Result<(), EffectError> {
        platform::alert(message)
    }

    fn open_in_new_context(&self, url: &str) -> Result<(), EffectError> {
        platform::open_in_new_context(url)
    }

    fn navigate_to(&self, url: &str) -> Result<(), EffectError> {
        platform::navigate_to(url)
    }
}

/// Carry out a submission against the running platform.
pub fn perform(submission: &Submission) {
    perform_with(&Platform, submission);
}

/// Run the outbound effect, then confirm with the localized alert.
///
/// Outbound links are never checked for delivery, so a refused link is logged
/// and the confirmation still shows.
pub fn perform_with(browser: &impl Browser, submission: &Submission) {
    let outbound = match submission {
        Submission::Notify { form, payload, .. } => {
            tracing::info!(form = *form, %payload, "form submitted");
            Ok(())
        }
        Submission::OpenWhatsApp { url, .. } => {
            tracing::info!(%url, "opening whatsapp");
            browser.open_in_new_context(url)
        }
        Submission::MailTo { url, payload, .. } => {
            tracing::info!(%payload, "tax return request");
            browser.navigate_to(url)
        }
    };
    if let Err(err) = outbound {
        tracing::warn!("outbound link failed: {err}");
    }
    if let Err(err) = browser.alert(&i18n::tr(submission.message_key())) {
        tracing::warn!("confirmation alert failed: {err}");
    }
}
