use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::viewport::{parallax, LayoutProbe, WindowProbe};
use crate::dom_utils::{query_all, set_style};
use crate::scheduler::Listener;

/// Hero content drifts down and fades while the first screen scrolls away.
pub fn mount(window: &Window, document: &Document) -> Result<Listener, JsValue> {
    let probe = WindowProbe::new(window.clone());
    let document = document.clone();
    Listener::new(window, "scroll", move |_| apply(&probe, &document))
}

pub fn apply(probe: &dyn LayoutProbe, document: &Document) {
    let (_, height) = probe.viewport_size();
    let Some((translate, opacity)) = parallax(probe.scroll_y(), height) else {
        return;
    };
    for el in query_all(document, ".hero-content") {
        set_style(&el, "transform", &format!("translateY({}px)", translate));
        set_style(&el, "opacity", &opacity.to_string());
    }
}
