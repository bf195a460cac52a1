//! Periodic page decoration: the header clock, random glitch flicker and
//! the holographic hue pulse. None of them keep state between runs.

use rand::Rng;
use web_sys::Document;

use crate::config::EffectsConfig;
use crate::dom_utils::{clear_style, query_all, run_after, set_style};
use crate::scheduler::IntervalTask;
use crate::utils::{browser_rng, format_clock};

/// Hue offset in degrees for one pulse, uniform in `[min, min + span)`.
pub fn hue_offset<R: Rng>(rng: &mut R, min: f64, span: f64) -> f64 {
    min + rng.gen::<f64>() * span
}

pub fn hue_filter(hue: f64) -> String {
    format!("hue-rotate({}deg) brightness(1.1)", hue)
}

/// Random index into a collection of `len` items.
pub fn pick_index<R: Rng>(rng: &mut R, len: usize) -> Option<usize> {
    (len > 0).then(|| rng.gen_range(0..len))
}

pub fn render_clock(document: &Document) {
    if let Some(el) = document.get_element_by_id("current-time") {
        let now = chrono::Local::now();
        el.set_text_content(Some(&format_clock(&now)));
    }
}

pub fn start_clock(document: Document, period_ms: u32) -> IntervalTask {
    render_clock(&document);
    IntervalTask::every(period_ms, move || render_clock(&document))
}

/// Replay the flicker animation on one `.glitch` element.
pub fn glitch_once<R: Rng>(document: &Document, rng: &mut R, gap_ms: u32) {
    let elements = query_all(document, ".glitch");
    let Some(index) = pick_index(rng, elements.len()) else {
        return;
    };
    let element = elements[index].clone();
    set_style(&element, "animation", "none");
    run_after(gap_ms, move || clear_style(&element, "animation"));
}

pub fn start_glitch(document: Document, config: &EffectsConfig) -> IntervalTask {
    let mut rng = browser_rng();
    let gap_ms = config.glitch_gap_ms;
    IntervalTask::every(config.glitch_period_ms, move || {
        glitch_once(&document, &mut rng, gap_ms)
    })
}

/// How one holographic pulse tints and for how long.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoloPulse {
    pub revert_ms: u32,
    pub hue_min: f64,
    pub hue_span: f64,
}

impl HoloPulse {
    pub fn from_config(config: &EffectsConfig) -> Self {
        HoloPulse {
            revert_ms: config.holo_revert_ms,
            hue_min: config.holo_hue_min,
            hue_span: config.holo_hue_span,
        }
    }
}

/// Tint every `.holographic` element for a moment.
pub fn pulse_once<R: Rng>(document: &Document, rng: &mut R, pulse: &HoloPulse) {
    for element in query_all(document, ".holographic") {
        let hue = hue_offset(rng, pulse.hue_min, pulse.hue_span);
        set_style(&element, "filter", &hue_filter(hue));
        run_after(pulse.revert_ms, move || clear_style(&element, "filter"));
    }
}

pub fn start_holographic(document: Document, config: &EffectsConfig) -> IntervalTask {
    let mut rng = browser_rng();
    let pulse = HoloPulse::from_config(config);
    IntervalTask::every(config.holo_period_ms, move || {
        pulse_once(&document, &mut rng, &pulse)
    })
}
