//! Named registry of everything that keeps running after start-up.

use super::frame::FrameLoop;
use super::interval::IntervalTask;
use super::listener::{Listener, ObserverGuard};
use crate::effects::typing::TypingLoop;

pub enum Handle {
    Frame(FrameLoop),
    Interval(IntervalTask),
    Listener(Listener),
    Observer(ObserverGuard),
    Typing(TypingLoop),
}

impl Handle {
    fn stop(&mut self) {
        match self {
            Handle::Frame(frame) => frame.stop(),
            Handle::Interval(task) => task.stop(),
            Handle::Typing(typing) => typing.stop(),
            // Dropping the guard detaches these.
            Handle::Listener(_) | Handle::Observer(_) => {}
        }
    }
}

impl From<FrameLoop> for Handle {
    fn from(h: FrameLoop) -> Self {
        Handle::Frame(h)
    }
}

impl From<IntervalTask> for Handle {
    fn from(h: IntervalTask) -> Self {
        Handle::Interval(h)
    }
}

impl From<Listener> for Handle {
    fn from(h: Listener) -> Self {
        Handle::Listener(h)
    }
}

impl From<ObserverGuard> for Handle {
    fn from(h: ObserverGuard) -> Self {
        Handle::Observer(h)
    }
}

impl From<TypingLoop> for Handle {
    fn from(h: TypingLoop) -> Self {
        Handle::Typing(h)
    }
}

#[derive(Default)]
pub struct EffectRegistry {
    entries: Vec<(&'static str, Handle)>,
}

impl EffectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: &'static str, handle: impl Into<Handle>) {
        self.entries.push((name, handle.into()));
    }

    pub fn extend<H: Into<Handle>>(&mut self, name: &'static str, handles: impl IntoIterator<Item = H>) {
        for handle in handles {
            self.register(name, handle);
        }
    }

    /// Names in registration order; repeated for effects with several handles.
    pub fn active_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stop every loop and timer and detach every listener.
    pub fn stop_all(&mut self) {
        for (name, handle) in self.entries.iter_mut() {
            crate::debug_log!("Stopping {}", name);
            handle.stop();
        }
        self.entries.clear();
    }
}
