//! Small DOM lookup helpers

use domain::DomainError;
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    Window,
};

pub fn window() -> Result<Window, DomainError> {
    web_sys::window().ok_or_else(|| DomainError::not_found("Window", "window"))
}

pub fn document() -> Result<Document, DomainError> {
    window()?
        .document()
        .ok_or_else(|| DomainError::not_found("Document", "window.document"))
}

/// Element with the given id, cast to `T`
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, DomainError> {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<T>().ok())
        .ok_or_else(|| DomainError::not_found("Element", format!("#{id}")))
}

/// First descendant of `root` matching `selector`, cast to `T`
pub fn find_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<T>().ok())
}

/// Every element matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        warn!(selector, "Invalid selector");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Current value of an input, textarea or select element
pub fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Toggle between `display: block` and `display: none`
pub fn set_displayed(element: &HtmlElement, displayed: bool) {
    let value = if displayed { "block" } else { "none" };
    if let Err(e) = element.style().set_property("display", value) {
        warn!(error = ?e, "Failed to set display");
    }
}
