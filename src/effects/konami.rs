//! Konami-code easter egg.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, KeyboardEvent};

use crate::constants::EASTER_EGG_DURATION_MS;
use crate::dom_utils::{clear_style, ensure_style_block, run_after, set_style};
use crate::scheduler::Listener;
use crate::toast::{self, NotificationKind};

pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

pub const ACTIVATED_TEXT: &str = "// CYBERPUNK_MODE_ACTIVATED // NEURAL_LINK_ESTABLISHED";

const RAINBOW_CSS: &str = "
@keyframes rainbowPulse {
    0%, 100% { filter: hue-rotate(0deg); }
    50% { filter: hue-rotate(180deg); }
}
";

#[derive(Debug, Default, Clone)]
pub struct KonamiDetector {
    index: usize,
}

impl KonamiDetector {
    /// Feed one key; `true` when it completes the sequence. A wrong key
    /// starts over without being matched against the first entry.
    pub fn feed(&mut self, key: &str) -> bool {
        if key == KONAMI_SEQUENCE[self.index] {
            self.index += 1;
            if self.index == KONAMI_SEQUENCE.len() {
                self.index = 0;
                return true;
            }
        } else {
            self.index = 0;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.index
    }
}

pub fn mount(document: &Document) -> Result<Listener, JsValue> {
    ensure_style_block(document, "easter-egg-styles", RAINBOW_CSS)?;
    let detector = Rc::new(RefCell::new(KonamiDetector::default()));
    let document_ref = document.clone();
    Listener::new(document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(|k| k.key()) else {
            return;
        };
        if detector.borrow_mut().feed(&key) {
            activate(&document_ref);
        }
    })
}

fn activate(document: &Document) {
    toast::emit(ACTIVATED_TEXT, NotificationKind::Success);
    let Some(body) = document.body() else {
        return;
    };
    set_style(&body, "animation", "rainbowPulse 3s ease infinite");
    run_after(EASTER_EGG_DURATION_MS, move || clear_style(&body, "animation"));
}
