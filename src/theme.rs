//! Dark/light theme toggle persisted under the `theme` key.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::constants::THEME_STORAGE_KEY;
use crate::dom_utils::{add_class, remove_class};
use crate::scheduler::Listener;
use crate::storage::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Anything but `"light"` reads as dark, like the stylesheet does.
    pub fn parse(raw: &str) -> Theme {
        if raw == "light" {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon class shown on the toggle: the theme you would switch to.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fa-sun",
            Theme::Light => "fa-moon",
        }
    }
}

/// Stored theme, or `fallback` on a first visit.
pub fn load_theme(store: &dyn PreferenceStore, fallback: Theme) -> Theme {
    store
        .get(THEME_STORAGE_KEY)
        .map(|raw| Theme::parse(&raw))
        .unwrap_or(fallback)
}

/// Flip `current`, persist the result and return it.
pub fn toggle_theme(store: &dyn PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.set(THEME_STORAGE_KEY, next.as_str());
    next
}

pub fn apply_theme(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            crate::warn_log!("Failed to set data-theme: {:?}", e);
        }
    }
    let icon = document
        .get_element_by_id("theme-toggle")
        .and_then(|toggle| toggle.query_selector("i").ok().flatten());
    if let Some(icon) = icon {
        remove_class(&icon, theme.toggled().icon_class());
        add_class(&icon, theme.icon_class());
    }
}

fn current_theme(document: &Document) -> Theme {
    document
        .document_element()
        .and_then(|root| root.get_attribute("data-theme"))
        .map(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Apply the stored theme and wire `#theme-toggle`.
pub fn mount<S>(document: &Document, store: Rc<S>, fallback: Theme) -> Result<Option<Listener>, JsValue>
where
    S: PreferenceStore + 'static,
{
    apply_theme(document, load_theme(&*store, fallback));
    let Some(toggle) = document.get_element_by_id("theme-toggle") else {
        return Ok(None);
    };
    let document = document.clone();
    let listener = Listener::new(&toggle, "click", move |_| {
        let next = toggle_theme(&*store, current_theme(&document));
        apply_theme(&document, next);
    })?;
    Ok(Some(listener))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_dark() {
        let store = MemoryStore::default();
        assert_eq!(load_theme(&store, Theme::default()), Theme::Dark);
        assert_eq!(load_theme(&store, Theme::Light), Theme::Light);
    }

    #[test]
    fn two_toggles_restore_the_stored_value() {
        let store = MemoryStore::default();
        store.set(THEME_STORAGE_KEY, "light");
        let start = load_theme(&store, Theme::Dark);
        let once = toggle_theme(&store, start);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
        let twice = toggle_theme(&store, once);
        assert_eq!(twice, start);
        assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn unknown_value_reads_as_dark() {
        assert_eq!(Theme::parse("solarized"), Theme::Dark);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let t: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(t, Theme::Dark);
    }

    #[test]
    fn icon_points_at_other_theme() {
        assert_eq!(Theme::Dark.icon_class(), "fa-sun");
        assert_eq!(Theme::Light.icon_class(), "fa-moon");
    }
}
