//! SPA navigation helpers on top of the History API.
//!
//! `yew-router` listens for `popstate`, so after rewriting the URL we
//! dispatch one synthetic event to make the router re-match.

use web_sys::window;

/// Navigate to `url`, adding a history entry. Used by the language
/// switcher so the back button returns to the previous page.
pub fn push_url(url: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    if let Ok(history) = win.history() {
        if history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)).is_ok() {
            if let Ok(event) = web_sys::Event::new("popstate") {
                let _ = win.dispatch_event(&event);
            }
            return true;
        }
    }
    false
}

/// Navigate to `url`, replacing the current history entry. Used by the
/// route guard: a language-mismatch redirect must not leave the foreign
/// URL in history, or the back button would bounce through the guard
/// forever.
pub fn replace_url(url: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    if let Ok(history) = win.history() {
        if history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)).is_ok() {
            if let Ok(event) = web_sys::Event::new("popstate") {
                let _ = win.dispatch_event(&event);
            }
            return true;
        }
    }
    false
}
