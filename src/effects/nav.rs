//! Navigation bar behaviour: the mobile menu, scroll-spy highlighting and
//! smooth in-page anchors.

use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, ScrollBehavior, ScrollToOptions, Window};

use super::viewport::{active_section, LayoutProbe, WindowProbe};
use crate::constants::SMOOTH_SCROLL_OFFSET;
use crate::dom_utils::{add_class, query_all, remove_class, toggle_class};
use crate::scheduler::Listener;

/// `#hamburger` toggles the menu; picking any link closes it. Nothing is
/// mounted when either anchor is missing.
pub fn mount_mobile_menu(document: &Document) -> Result<Vec<Listener>, JsValue> {
    let (Some(hamburger), Some(menu)) = (
        document.get_element_by_id("hamburger"),
        document.get_element_by_id("nav-menu"),
    ) else {
        return Ok(Vec::new());
    };

    let mut listeners = Vec::new();
    {
        let (hamburger, menu) = (hamburger.clone(), menu.clone());
        let target = hamburger.clone();
        listeners.push(Listener::new(&target, "click", move |_| {
            toggle_class(&hamburger, "active");
            toggle_class(&menu, "active");
        })?);
    }
    for link in query_all(document, ".nav-link") {
        let (hamburger, menu) = (hamburger.clone(), menu.clone());
        listeners.push(Listener::new(&link, "click", move |_| {
            remove_class(&hamburger, "active");
            remove_class(&menu, "active");
        })?);
    }
    Ok(listeners)
}

/// Section id a nav link points at (`href="#about"` -> `about`).
pub fn link_target(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Whether the link with `href` should carry `active` while `current` is the
/// active section id (empty when none is).
pub fn is_active_link(href: &str, current: &str) -> bool {
    link_target(href) == current
}

pub fn highlight_active_link(probe: &dyn LayoutProbe, sections: &[Element], links: &[Element]) {
    let tops: Vec<(String, f64)> = sections
        .iter()
        .map(|s| (s.id(), probe.element_top_offset(s)))
        .collect();
    let current = active_section(probe.scroll_y(), &tops).unwrap_or("");
    for link in links {
        remove_class(link, "active");
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        if is_active_link(&href, current) {
            add_class(link, "active");
        }
    }
}

pub fn mount_scroll_spy(window: &Window, document: &Document) -> Result<Option<Listener>, JsValue> {
    let sections = query_all(document, "section[id]");
    let links = query_all(document, ".nav-link");
    if sections.is_empty() || links.is_empty() {
        return Ok(None);
    }
    let probe = WindowProbe::new(window.clone());
    let listener = Listener::new(window, "scroll", move |_| {
        highlight_active_link(&probe, &sections, &links);
    })?;
    Ok(Some(listener))
}

/// Anchors starting with `#` scroll smoothly to 80px above their target.
pub fn mount_smooth_scroll(window: &Window, document: &Document) -> Result<Vec<Listener>, JsValue> {
    let window = Rc::new(window.clone());
    let mut listeners = Vec::new();
    for anchor in query_all(document, r##"a[href^="#"]"##) {
        let (window, document, anchor_ref) = (window.clone(), document.clone(), anchor.clone());
        listeners.push(Listener::new(&anchor, "click", move |event| {
            event.prevent_default();
            let href = anchor_ref.get_attribute("href").unwrap_or_default();
            // A bare "#" is not a valid selector.
            if href.len() < 2 {
                return;
            }
            let target = document.query_selector(&href).ok().flatten();
            let Some(top) = target
                .as_ref()
                .and_then(|t| t.dyn_ref::<web_sys::HtmlElement>())
                .map(|t| t.offset_top() as f64)
            else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(top - SMOOTH_SCROLL_OFFSET);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        })?);
    }
    Ok(listeners)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_target_strips_hash() {
        assert_eq!(link_target("#projects"), "projects");
        assert_eq!(link_target("projects"), "projects");
        assert_eq!(link_target("#"), "");
    }

    #[test]
    fn only_the_matching_link_is_active() {
        assert!(is_active_link("#about", "about"));
        assert!(!is_active_link("#about", "projects"));
        assert!(!is_active_link("#about", ""));
    }

    #[test]
    fn bare_hash_link_is_active_above_all_sections() {
        assert!(is_active_link("#", ""));
        assert!(!is_active_link("#", "home"));
    }
}
