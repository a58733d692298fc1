//! Outbound link construction (WhatsApp deep links and `mailto:` URLs).

/// `https://wa.me/<number>?text=<encoded>`
pub fn whatsapp_url(number: &str, text: &str) -> String {
    format!("https://wa.me/{number}?text={}", urlencoding::encode(text))
}

/// `mailto:<address>?subject=<encoded>&body=<encoded>`
pub fn mailto_url(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{address}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}
