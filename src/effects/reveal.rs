//! Fade-in-on-scroll for content panels and the project card `animate-in`
//! hook.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use super::viewport::{LayoutProbe, WindowProbe};
use crate::constants::*;
use crate::dom_utils::{add_class, query_all, set_style};
use crate::scheduler::{Handle, Listener, ObserverGuard};

fn hide(el: &Element) {
    set_style(el, "opacity", "0");
    set_style(el, "transform", "translateY(30px)");
    set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease");
}

fn reveal(el: &Element) {
    set_style(el, "opacity", "1");
    set_style(el, "transform", "translateY(0)");
}

/// Hide every panel and bring it back once it enters the viewport. Browsers
/// without `IntersectionObserver` get a scroll listener instead.
pub fn mount_panels(window: &Window, document: &Document) -> Result<Option<Handle>, JsValue> {
    let panels = query_all(document, REVEAL_SELECTOR);
    if panels.is_empty() {
        return Ok(None);
    }
    for panel in &panels {
        hide(panel);
    }

    let observed = ObserverGuard::observe(
        &panels,
        REVEAL_THRESHOLD,
        Some(REVEAL_ROOT_MARGIN),
        |entry| {
            if entry.is_intersecting() {
                reveal(&entry.target());
            }
        },
    );
    match observed {
        Ok(guard) => Ok(Some(guard.into())),
        Err(e) => {
            crate::warn_log!("IntersectionObserver unavailable, revealing on scroll: {:?}", e);
            let probe = WindowProbe::new(window.clone());
            reveal_visible(&probe, &panels);
            let listener = Listener::new(window, "scroll", move |_| reveal_visible(&probe, &panels))?;
            Ok(Some(listener.into()))
        }
    }
}

fn reveal_visible(probe: &dyn LayoutProbe, panels: &[Element]) {
    for panel in panels {
        if probe.is_intersecting_viewport(panel) {
            reveal(panel);
        }
    }
}

/// Add `animate-in` to project cards as they scroll into view.
pub fn mount_projects(document: &Document) -> Result<Option<ObserverGuard>, JsValue> {
    let cards = query_all(document, ".project-card");
    if cards.is_empty() {
        return Ok(None);
    }
    let guard = ObserverGuard::observe(&cards, PROJECT_THRESHOLD, Some(REVEAL_ROOT_MARGIN), |entry| {
        if entry.is_intersecting() {
            add_class(&entry.target(), "animate-in");
        }
    })?;
    web_sys::console::log_2(
        &"%c[SCROLL ANIMATIONS] Project scroll animations initialized".into(),
        &"color: #ff006e; font-weight: bold;".into(),
    );
    Ok(Some(guard))
}
