use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Reload the current document, discarding every piece of in-memory state.
pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        log::warn!("reload requested outside a browser context");
        return;
    };
    if let Err(err) = window.location().reload() {
        log::error!("page reload failed: {}", js_error_message(&err));
    }
}
