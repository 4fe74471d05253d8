use wasm_bindgen::JsValue;
use web_sys::window;
use shared::constants::SITE_URL;
use shared::sharing::ShareCapability;

/// Canonical URL of the page being shared.
pub fn get_share_url() -> String {
    window()
        .and_then(|w| w.location().href().ok())
        .filter(|href| href.starts_with("http"))
        .unwrap_or_else(|| SITE_URL.to_string())
}

/// Checks once whether the browser exposes `navigator.share`.
pub fn detect_share_capability() -> ShareCapability {
    let native_share = window()
        .map(|w| w.navigator())
        .and_then(|navigator| js_sys::Reflect::get(&navigator, &JsValue::from_str("share")).ok())
        .map(|share| share.is_function())
        .unwrap_or(false);

    ShareCapability { native_share }
}
