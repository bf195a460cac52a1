//! Count-up animation for the stats grid, played once when it scrolls into
//! view.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use crate::constants::STATS_VISIBLE_THRESHOLD;
use crate::dom_utils::query_all;
use crate::scheduler::ObserverGuard;

/// Counts from zero to `target` in equal increments. Whole-number targets
/// render as integers, fractional ones with two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    decimal: bool,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, steps: u32) -> Self {
        CounterAnimation {
            target,
            increment: target / steps.max(1) as f64,
            current: 0.0,
            decimal: target.fract() != 0.0,
            finished: false,
        }
    }

    /// Parse a `data-target` attribute value.
    pub fn from_attribute(raw: &str, steps: u32) -> Option<Self> {
        let target: f64 = raw.trim().parse().ok()?;
        target.is_finite().then(|| Self::new(target, steps))
    }

    pub fn is_decimal(&self) -> bool {
        self.decimal
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Next text to display; `None` once the final value has been shown.
    pub fn step(&mut self) -> Option<String> {
        if self.finished {
            return None;
        }
        self.current += self.increment;
        // A non-positive target would never reach it by adding.
        if self.current >= self.target || self.increment <= 0.0 {
            self.finished = true;
            return Some(self.format(self.target, true));
        }
        Some(self.format(self.current, false))
    }

    fn format(&self, value: f64, last: bool) -> String {
        if self.decimal {
            format!("{:.2}", value)
        } else if last {
            format!("{}", value.round() as i64)
        } else {
            format!("{}", value.floor() as i64)
        }
    }
}

/// One-shot latch.
#[derive(Debug, Default, Clone)]
pub struct OnceGuard {
    fired: Rc<Cell<bool>>,
}

impl OnceGuard {
    /// `true` only on the first call.
    pub fn fire(&self) -> bool {
        !self.fired.replace(true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired.get()
    }
}

/// Watch every `.stats-grid`; the first time one is half visible, animate all
/// `.stat-number` elements.
pub fn mount(document: &Document, steps: u32, step_ms: u32) -> Result<Option<ObserverGuard>, JsValue> {
    let grids = query_all(document, ".stats-grid");
    if grids.is_empty() {
        return Ok(None);
    }
    let stats = query_all(document, ".stat-number");
    let guard = OnceGuard::default();
    let observer = ObserverGuard::observe(&grids, STATS_VISIBLE_THRESHOLD, None, move |entry| {
        if entry.is_intersecting() && guard.fire() {
            for stat in &stats {
                animate_counter(stat.clone(), steps, step_ms);
            }
        }
    })?;
    Ok(Some(observer))
}

fn animate_counter(element: Element, steps: u32, step_ms: u32) {
    let Some(raw) = element.get_attribute("data-target") else {
        return;
    };
    let Some(mut counter) = CounterAnimation::from_attribute(&raw, steps) else {
        crate::warn_log!("Ignoring stat with data-target={:?}", raw);
        return;
    };
    spawn_local(async move {
        loop {
            TimeoutFuture::new(step_ms).await;
            match counter.step() {
                Some(text) => element.set_text_content(Some(&text)),
                None => break,
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COUNTER_STEPS;
    #[cfg(not(target_arch = "wasm32"))]
    use proptest::prelude::*;

    fn run(mut counter: CounterAnimation) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(text) = counter.step() {
            out.push(text);
        }
        out
    }

    #[test]
    fn integer_target_ends_exactly() {
        let frames = run(CounterAnimation::new(95.0, COUNTER_STEPS));
        assert_eq!(frames.last().map(String::as_str), Some("95"));
        assert!(frames.len() <= COUNTER_STEPS as usize + 1);
        assert_eq!(frames[0], "1");
        for f in &frames {
            assert!(f.parse::<i64>().unwrap() <= 95);
        }
    }

    #[test]
    fn decimal_target_keeps_two_places() {
        let counter = CounterAnimation::from_attribute("4.80", COUNTER_STEPS).unwrap();
        assert!(counter.is_decimal());
        let frames = run(counter);
        assert_eq!(frames.last().map(String::as_str), Some("4.80"));
        assert_eq!(frames[0], "0.10");
        for f in &frames {
            assert!(f.parse::<f64>().unwrap() <= 4.8);
            assert_eq!(f.split('.').nth(1).map(str::len), Some(2));
        }
    }

    #[test]
    fn finished_counter_stays_finished() {
        let mut counter = CounterAnimation::new(3.0, 3);
        assert_eq!(counter.step().as_deref(), Some("1"));
        assert_eq!(counter.step().as_deref(), Some("2"));
        assert_eq!(counter.step().as_deref(), Some("3"));
        assert!(counter.is_finished());
        assert_eq!(counter.step(), None);
    }

    #[test]
    fn zero_target_finishes_immediately() {
        assert_eq!(run(CounterAnimation::new(0.0, 50)), vec!["0".to_string()]);
    }

    #[test]
    fn unparsable_attribute_is_skipped() {
        assert!(CounterAnimation::from_attribute("lots", 50).is_none());
        assert!(CounterAnimation::from_attribute("NaN", 50).is_none());
    }

    #[test]
    fn guard_fires_once() {
        let guard = OnceGuard::default();
        let shared = guard.clone();
        assert!(guard.fire());
        assert!(!shared.fire());
        assert!(guard.has_fired());
    }

    #[cfg(not(target_arch = "wasm32"))]
    proptest! {
        #[test]
        fn never_overshoots(target in 0.01f64..10_000.0, steps in 1u32..120) {
            let frames = run(CounterAnimation::new(target, steps));
            prop_assert!(frames.len() <= steps as usize + 1);
            let last: f64 = frames.last().unwrap().parse().unwrap();
            for f in &frames {
                prop_assert!(f.parse::<f64>().unwrap() <= last + 1e-9);
            }
        }
    }
}
