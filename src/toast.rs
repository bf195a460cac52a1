//! Tiny toast / notification helper.
//!
//! Only one notification is on screen at a time: emitting a new one removes
//! the previous element and cancels its pending timers. Each toast slides out
//! after a few seconds and is removed once the exit animation has played.

use std::cell::{Cell, RefCell};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config::effects_config;
use crate::dom_utils::{ensure_style_block, query_all, set_style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Info => "i",
            NotificationKind::Success => "✓",
        }
    }

    fn accent(self) -> &'static str {
        match self {
            NotificationKind::Info => "#00f0ff",
            NotificationKind::Success => "#00ff9f",
        }
    }

    fn glow(self) -> &'static str {
        match self {
            NotificationKind::Info => "rgba(0, 240, 255, 0.5)",
            NotificationKind::Success => "rgba(0, 255, 159, 0.5)",
        }
    }

    /// Inline style for the notification root.
    pub fn inline_style(self) -> String {
        format!(
            "position:fixed;top:100px;right:20px;padding:1rem 1.5rem;\
             background:rgba(10, 14, 39, 0.95);border:2px solid {};color:white;\
             font-family:'Courier New', monospace;font-weight:700;letter-spacing:1px;\
             border-radius:8px;box-shadow:0 0 30px {};z-index:10000;\
             animation:slideInRight 0.5s ease;\
             clip-path:polygon(10px 0%, 100% 0%, 100% calc(100% - 10px), calc(100% - 10px) 100%, 0% 100%, 0% 10px);",
            self.accent(),
            self.glow()
        )
    }
}

const NOTIFICATION_CSS: &str = "
@keyframes slideInRight{from{transform:translateX(400px);opacity:0}to{transform:translateX(0);opacity:1}}
@keyframes slideOutRight{from{transform:translateX(0);opacity:1}to{transform:translateX(400px);opacity:0}}
.notification-content{display:flex;align-items:center;gap:1rem}
.notification-icon{font-size:1.5rem}
";

struct ActiveNotification {
    id: u64,
    element: Element,
    // Slide-out first, then removal.
    timer: Option<Timeout>,
}

impl ActiveNotification {
    fn remove(self) {
        let ActiveNotification { element, timer, .. } = self;
        drop(timer);
        element.remove();
    }
}

thread_local! {
    static CURRENT: RefCell<Option<ActiveNotification>> = RefCell::new(None);
    static NEXT_ID: Cell<u64> = Cell::new(0);
}

pub fn success(msg: &str) {
    emit(msg, NotificationKind::Success);
}

/// Show `message`, replacing whatever notification is currently visible.
pub fn emit(message: &str, kind: NotificationKind) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };
    if let Err(e) = show(&document, message, kind) {
        crate::warn_log!("Failed to show notification: {:?}", e);
    }
}

fn show(document: &Document, message: &str, kind: NotificationKind) -> Result<(), JsValue> {
    ensure_style_block(document, "notification-styles", NOTIFICATION_CSS)?;

    if let Some(previous) = CURRENT.with(|slot| slot.borrow_mut().take()) {
        previous.remove();
    }
    // Anything left over from markup or another script.
    for stale in query_all(document, ".cyber-notification") {
        stale.remove();
    }

    let element = build(document, message, kind)?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&element)?;

    let id = NEXT_ID.with(|n| {
        let id = n.get() + 1;
        n.set(id);
        id
    });
    let slide_out = Timeout::new(effects_config().notification_lifetime_ms, move || dismiss(id));
    CURRENT.with(|slot| {
        *slot.borrow_mut() = Some(ActiveNotification {
            id,
            element,
            timer: Some(slide_out),
        });
    });
    Ok(())
}

fn build(document: &Document, message: &str, kind: NotificationKind) -> Result<Element, JsValue> {
    let root = document.create_element("div")?;
    root.set_class_name(&format!("cyber-notification {}", kind.class_name()));
    root.set_attribute("style", &kind.inline_style())?;

    let content = document.create_element("div")?;
    content.set_class_name("notification-content");
    let icon = document.create_element("span")?;
    icon.set_class_name("notification-icon");
    icon.set_text_content(Some(kind.icon()));
    let text = document.create_element("span")?;
    text.set_class_name("notification-text");
    text.set_text_content(Some(message));
    content.append_child(&icon)?;
    content.append_child(&text)?;

    let glow = document.create_element("div")?;
    glow.set_class_name("notification-glow");

    root.append_child(&content)?;
    root.append_child(&glow)?;
    Ok(root)
}

fn dismiss(id: u64) {
    CURRENT.with(|slot| {
        let mut slot = slot.borrow_mut();
        let Some(active) = slot.as_mut().filter(|a| a.id == id) else {
            return;
        };
        set_style(&active.element, "animation", "slideOutRight 0.5s ease");
        let exit_ms = effects_config().notification_exit_ms;
        active.timer = Some(Timeout::new(exit_ms, move || remove(id)));
    });
}

fn remove(id: u64) {
    let finished = CURRENT.with(|slot| {
        let mut slot = slot.borrow_mut();
        match slot.as_ref() {
            Some(active) if active.id == id => slot.take(),
            _ => None,
        }
    });
    if let Some(active) = finished {
        active.remove();
    }
}

/// Text of the visible notification, if any.
pub fn current_message() -> Option<String> {
    CURRENT.with(|slot| {
        slot.borrow().as_ref().and_then(|a| {
            a.element
                .query_selector(".notification-text")
                .ok()
                .flatten()
                .and_then(|t| t.text_content())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_have_distinct_styling() {
        assert_eq!(NotificationKind::Success.class_name(), "notification-success");
        assert_eq!(NotificationKind::Info.class_name(), "notification-info");
        assert_eq!(NotificationKind::Success.icon(), "✓");
        assert!(NotificationKind::Success.inline_style().contains("#00ff9f"));
        assert!(NotificationKind::Info.inline_style().contains("#00f0ff"));
    }
}
