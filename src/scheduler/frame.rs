//! Display-synchronised animation loops.
//!
//! A `FrameLoop` asks for one `requestAnimationFrame` callback at a time and
//! re-arms itself after each tick. The handle owns the loop: `stop()` (or
//! dropping the handle) cancels the pending frame and the closure is released.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::canvas::surface::Surface;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// One frame of an animated surface: update, then draw, on the same surface.
pub trait Animate {
    fn frame(&mut self, surface: &mut dyn Surface);
}

struct FrameState {
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    callback: RefCell<Option<FrameClosure>>,
    frames: Cell<u64>,
}

impl FrameState {
    fn request_next(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
        let callback = self.callback.borrow();
        if let Some(cb) = callback.as_ref() {
            let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            self.pending.set(Some(id));
        }
        Ok(())
    }

    fn cancel(&self) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

pub struct FrameLoop {
    state: Rc<FrameState>,
}

impl FrameLoop {
    /// Start calling `tick(timestamp)` once per display refresh.
    pub fn start<F>(mut tick: F) -> Result<FrameLoop, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let state = Rc::new(FrameState {
            running: Cell::new(true),
            pending: Cell::new(None),
            callback: RefCell::new(None),
            frames: Cell::new(0),
        });

        let weak: Weak<FrameState> = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }
            tick(timestamp);
            state.frames.set(state.frames.get() + 1);

            // Rescheduling is the last thing a tick does.
            if state.running.get() {
                if let Err(e) = state.request_next() {
                    crate::warn_log!("requestAnimationFrame failed: {:?}", e);
                    state.running.set(false);
                }
            }
        }) as Box<dyn FnMut(f64)>);

        *state.callback.borrow_mut() = Some(callback);
        state.request_next()?;
        Ok(FrameLoop { state })
    }

    /// Drive an `Animate` implementor against its own surface.
    pub fn animate<A, S>(animation: Rc<RefCell<A>>, surface: Rc<RefCell<S>>) -> Result<FrameLoop, JsValue>
    where
        A: Animate + 'static,
        S: Surface + 'static,
    {
        FrameLoop::start(move |_| {
            let mut surface = surface.borrow_mut();
            animation.borrow_mut().frame(&mut *surface);
        })
    }

    pub fn stop(&self) {
        self.state.cancel();
    }

    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Number of ticks delivered so far.
    pub fn frames(&self) -> u64 {
        self.state.frames.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.state.cancel();
    }
}
