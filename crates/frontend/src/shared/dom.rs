//! Small best-effort wrappers over `web_sys` DOM calls.
//!
//! A missing window, document or element is never an error here: the call
//! is simply skipped.

use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, HtmlInputElement};

/// Element the event was dispatched on
pub fn event_target_element(ev: &web_sys::Event) -> Option<Element> {
    ev.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Nearest ancestor (or self) matching `selector`
pub fn closest(element: &Element, selector: &str) -> Option<Element> {
    element.closest(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(document) = window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

/// Stops the page behind a modal from scrolling.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body
            .style()
            .set_property("overflow", if locked { "hidden" } else { "auto" });
    }
}

pub fn focus_input(id: &str) -> bool {
    match element_by_id(id).and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) {
        Some(input) => input.focus().is_ok(),
        None => false,
    }
}

pub fn set_transform(element: &Element, transform: &str) {
    if let Some(el) = element.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("transform", transform);
    }
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

/// Adds `class` to `<body>`.
pub fn add_body_class(class: &str) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().add_1(class);
    }
}
