//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Every helper tolerates missing nodes and failed writes: effects are
//! decoration, so a broken style write is logged and skipped.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement, Window};

pub fn window() -> Result<Window, wasm_bindgen::JsValue> {
    web_sys::window().ok_or_else(|| "no global `window` exists".into())
}

pub fn document() -> Result<Document, wasm_bindgen::JsValue> {
    window()?
        .document()
        .ok_or_else(|| "should have a document on window".into())
}

/// Collect `querySelectorAll(selector)` into element handles. An invalid
/// selector yields an empty list.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            crate::warn_log!("Bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

/// Set an inline style property. Non-HTML elements are ignored.
pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().set_property(property, value) {
            crate::warn_log!("Failed to set {}: {:?}", property, e);
        }
    }
}

/// Reset an inline style property so the stylesheet value applies again.
pub fn clear_style(el: &Element, property: &str) {
    set_style(el, property, "");
}

pub fn add_class(el: &Element, class: &str) {
    let _ = el.class_list().add_1(class);
}

pub fn remove_class(el: &Element, class: &str) {
    let _ = el.class_list().remove_1(class);
}

pub fn toggle_class(el: &Element, class: &str) {
    let _ = el.class_list().toggle(class);
}

/// Value of an `<input>` or `<textarea>` by id; empty when absent.
pub fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Append a `<style id=…>` block to `<head>` once per page.
pub fn ensure_style_block(document: &Document, id: &str, css: &str) -> Result<(), wasm_bindgen::JsValue> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    } else if let Some(body) = document.body() {
        body.append_child(&style)?;
    }
    Ok(())
}

/// Fire-and-forget `setTimeout`; the closure is released after it runs.
pub fn run_after<F>(delay_ms: u32, callback: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = web_sys::window() else {
        return;
    };
    let cb = wasm_bindgen::closure::Closure::once_into_js(callback);
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        delay_ms as i32,
    );
}
