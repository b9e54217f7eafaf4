//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::core::SessionOptions;

/// Attribute on the mount element holding JSON session options.
pub const OPTIONS_ATTRIBUTE: &str = "data-terminal-options";

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Focus an element by CSS selector.
///
/// Returns `true` if the element was found and focused successfully.
pub fn focus_element(selector: &str) -> bool {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(element) = document.query_selector(selector).ok().flatten()
        && let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>()
    {
        html_element.focus().is_ok()
    } else {
        false
    }
}

/// Focus the terminal input element.
#[inline]
pub fn focus_terminal_input() {
    focus_element("input");
}

/// Read session options from the mount element.
///
/// Falls back to defaults when the attribute is missing; malformed JSON is
/// logged and also falls back to defaults.
pub fn session_options(element: &web_sys::Element) -> SessionOptions {
    let Some(json) = element.get_attribute(OPTIONS_ATTRIBUTE) else {
        return SessionOptions::default();
    };
    SessionOptions::from_json(&json).unwrap_or_else(|err| {
        log::warn!("ignoring {}: {}", OPTIONS_ATTRIBUTE, err);
        SessionOptions::default()
    })
}
