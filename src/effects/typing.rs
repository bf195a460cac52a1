//! Typewriter animation over a fixed list of role titles.
//!
//! Each role is typed one grapheme at a time, held, deleted, and followed by
//! the next role; the list wraps around forever.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use unicode_segmentation::UnicodeSegmentation;
use web_sys::Element;

use crate::constants::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub next_delay_ms: u32,
}

/// Pauses between typing frames, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelays {
    pub start_ms: u32,
    pub char_ms: u32,
    pub delete_ms: u32,
    pub hold_ms: u32,
    pub next_role_ms: u32,
}

impl Default for TypingDelays {
    fn default() -> Self {
        TypingDelays {
            start_ms: TYPING_START_DELAY_MS,
            char_ms: TYPING_CHAR_DELAY_MS,
            delete_ms: TYPING_DELETE_DELAY_MS,
            hold_ms: TYPING_HOLD_DELAY_MS,
            next_role_ms: TYPING_NEXT_ROLE_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    roles: Vec<String>,
    delays: TypingDelays,
    role_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(roles: Vec<String>, delays: TypingDelays) -> Self {
        Typewriter {
            roles,
            delays,
            role_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn role_index(&self) -> usize {
        self.role_index
    }

    pub fn delays(&self) -> TypingDelays {
        self.delays
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Advance by one character and return what to display. `None` when
    /// there are no roles to type.
    pub fn step(&mut self) -> Option<TypingFrame> {
        let role = self.roles.get(self.role_index)?;
        let graphemes: Vec<&str> = role.graphemes(true).collect();

        let mut delay;
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            delay = self.delays.delete_ms;
        } else {
            self.char_index = (self.char_index + 1).min(graphemes.len());
            delay = self.delays.char_ms;
        }
        let text = graphemes[..self.char_index].concat();

        if !self.deleting && self.char_index == graphemes.len() {
            delay = self.delays.hold_ms;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.role_index = (self.role_index + 1) % self.roles.len();
            delay = self.delays.next_role_ms;
        }

        Some(TypingFrame {
            text,
            next_delay_ms: delay,
        })
    }
}

/// Self-rescheduling timeout chain writing into one element.
pub struct TypingLoop {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl TypingLoop {
    pub fn start(target: Element, typewriter: Typewriter) -> TypingLoop {
        let pending = Rc::new(RefCell::new(None));
        let start_ms = typewriter.delays().start_ms;
        let writer = Rc::new(RefCell::new(typewriter));
        schedule(&pending, writer, target, start_ms);
        TypingLoop { pending }
    }

    pub fn stop(&self) {
        self.pending.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

fn schedule(
    pending: &Rc<RefCell<Option<Timeout>>>,
    writer: Rc<RefCell<Typewriter>>,
    target: Element,
    delay_ms: u32,
) {
    let slot = Rc::downgrade(pending);
    let timeout = Timeout::new(delay_ms, move || {
        let Some(pending) = slot.upgrade() else {
            return;
        };
        // This timeout has fired; clear it before arming the next one.
        pending.borrow_mut().take();
        let frame = writer.borrow_mut().step();
        if let Some(frame) = frame {
            target.set_text_content(Some(&frame.text));
            schedule(&pending, writer, target, frame.next_delay_ms);
        }
    });
    *pending.borrow_mut() = Some(timeout);
}
