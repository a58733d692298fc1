//! Browser side effects: alerts, new browsing contexts and navigation.
//!
//! On wasm32 these go straight through `web-sys`. Native builds render inside
//! a webview, so the same calls are issued as small scripts via
//! `document::eval`. Arguments are quoted with `serde_json` so any user text
//! ends up as a valid JS string literal.
//!
//! None of these calls report delivery. An error only means the platform
//! refused the request outright.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("no browser window available")]
    WindowUnavailable,
    #[error("browser rejected the request: {0}")]
    Rejected(String),
    #[error("could not quote script argument: {0}")]
    Quote(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
fn window() -> Result<web_sys::Window, EffectError> {
    web_sys::window().ok_or(EffectError::WindowUnavailable)
}

#[cfg(target_arch = "wasm32")]
fn rejected(err: wasm_bindgen::JsValue) -> EffectError {
    EffectError::Rejected(format!("{err:?}"))
}

/// Show a blocking browser alert.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) -> Result<(), EffectError> {
    window()?.alert_with_message(message).map_err(rejected)
}

/// Open `url` in a new browsing context (tab/window).
#[cfg(target_arch = "wasm32")]
pub fn open_in_new_context(url: &str) -> Result<(), EffectError> {
    window()?
        .open_with_url_and_target(url, "_blank")
        .map(|_| ())
        .map_err(rejected)
}

/// Point the current browsing context at `url` (used for `mailto:`).
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(url: &str) -> Result<(), EffectError> {
    window()?.location().set_href(url).map_err(rejected)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) -> Result<(), EffectError> {
    run_script(&format!("window.alert({});", quote(message)?))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_context(url: &str) -> Result<(), EffectError> {
    run_script(&format!("window.open({}, '_blank');", quote(url)?))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(url: &str) -> Result<(), EffectError> {
    run_script(&format!("window.location.href = {};", quote(url)?))
}

#[cfg(not(target_arch = "wasm32"))]
fn run_script(script: &str) -> Result<(), EffectError> {
    // Fire and forget: the eval handle is dropped without awaiting a result.
    let _ = dioxus::document::eval(script);
    Ok(())
}

/// Encode `value` as a JS string literal.
pub fn quote(value: &str) -> Result<String, EffectError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_escapes_script_breaking_characters() {
        let quoted = quote("it's \"fine\"\n</script>").unwrap();
        assert!(quoted.starts_with('"') && quoted.ends_with('"'));
        assert!(quoted.contains("\\\"fine\\\""));
        assert!(quoted.contains("\\n"));
    }
}
