//! Owned DOM event listeners and intersection observers.
//!
//! Both guards detach from the page when dropped, so whoever holds them
//! decides how long a handler lives.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Listener, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Listener {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

type ObserverClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: ObserverClosure,
}

impl ObserverGuard {
    /// Observe `targets`; `on_entry` runs for every reported entry.
    pub fn observe<F>(
        targets: &[Element],
        threshold: f64,
        root_margin: Option<&str>,
        mut on_entry: F,
    ) -> Result<ObserverGuard, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        if let Some(margin) = root_margin {
            options.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in targets {
            observer.observe(target);
        }
        Ok(ObserverGuard {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
