//! Runtime tunables for every effect.
//!
//! The page can hand over a configuration object before the module starts
//! (`init_effects_config_js`) or embed one as
//! `<script type="application/json" id="fx-config">`. Any field left out keeps
//! its default, so `{}` is a valid configuration.
//!
//! The module starts before page scripts run, so start-up first gives the
//! page a short window (`wait_for_page_config`) to call
//! `init_effects_config_js`.

use lazy_static::lazy_static;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::constants::*;
use crate::effects::typing::TypingDelays;
use crate::theme::Theme;

lazy_static! {
    static ref EFFECTS_CONFIG: RwLock<Option<EffectsConfig>> = RwLock::new(None);
}

// Set once a page script has handed over its configuration.
static FROM_PAGE_SCRIPT: AtomicBool = AtomicBool::new(false);

/// Id of the inline JSON element read at start-up.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub particle_count: usize,
    pub particle_colors: (String, String),
    pub trail_capacity: usize,
    pub trail_decay_step: f64,
    pub clock_period_ms: u32,
    pub glitch_period_ms: u32,
    pub glitch_gap_ms: u32,
    pub holo_period_ms: u32,
    pub holo_revert_ms: u32,
    pub holo_hue_min: f64,
    pub holo_hue_span: f64,
    pub roles: Vec<String>,
    pub typing_start_delay_ms: u32,
    pub typing_char_delay_ms: u32,
    pub typing_delete_delay_ms: u32,
    pub typing_hold_delay_ms: u32,
    pub typing_next_role_delay_ms: u32,
    pub counter_steps: u32,
    pub counter_step_ms: u32,
    pub notification_lifetime_ms: u32,
    pub notification_exit_ms: u32,
    pub contact_email: String,
    pub default_theme: Theme,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            particle_colors: (
                PARTICLE_COLOR_CYAN.to_string(),
                PARTICLE_COLOR_MAGENTA.to_string(),
            ),
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            trail_decay_step: DEFAULT_TRAIL_DECAY_STEP,
            clock_period_ms: CLOCK_PERIOD_MS,
            glitch_period_ms: GLITCH_PERIOD_MS,
            glitch_gap_ms: GLITCH_GAP_MS,
            holo_period_ms: HOLO_PERIOD_MS,
            holo_revert_ms: HOLO_REVERT_MS,
            holo_hue_min: HOLO_HUE_MIN,
            holo_hue_span: HOLO_HUE_SPAN,
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
            typing_start_delay_ms: TYPING_START_DELAY_MS,
            typing_char_delay_ms: TYPING_CHAR_DELAY_MS,
            typing_delete_delay_ms: TYPING_DELETE_DELAY_MS,
            typing_hold_delay_ms: TYPING_HOLD_DELAY_MS,
            typing_next_role_delay_ms: TYPING_NEXT_ROLE_DELAY_MS,
            counter_steps: COUNTER_STEPS,
            counter_step_ms: COUNTER_STEP_MS,
            notification_lifetime_ms: NOTIFICATION_LIFETIME_MS,
            notification_exit_ms: NOTIFICATION_EXIT_MS,
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            default_theme: Theme::Dark,
        }
    }
}

impl EffectsConfig {
    /// Parse a JSON document; missing fields fall back to their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<EffectsConfig>(json).map(Self::sanitized)
    }

    /// Decode a plain JS object handed over by the page.
    pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
        serde_wasm_bindgen::from_value::<EffectsConfig>(value)
            .map(Self::sanitized)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn typing_delays(&self) -> TypingDelays {
        TypingDelays {
            start_ms: self.typing_start_delay_ms,
            char_ms: self.typing_char_delay_ms,
            delete_ms: self.typing_delete_delay_ms,
            hold_ms: self.typing_hold_delay_ms,
            next_role_ms: self.typing_next_role_delay_ms,
        }
    }

    /// Apply the compile-time contact address, if one was baked in.
    pub fn with_build_overrides(mut self) -> Self {
        if let Some(email) = option_env!("PORTFOLIO_CONTACT_EMAIL") {
            self.contact_email = email.to_string();
        }
        self
    }

    // Zero-sized queues and step counts would divide by zero downstream.
    fn sanitized(mut self) -> Self {
        if self.trail_capacity == 0 {
            self.trail_capacity = DEFAULT_TRAIL_CAPACITY;
        }
        self.trail_capacity = self.trail_capacity.min(MAX_TRAIL_CAPACITY);
        if self.counter_steps == 0 {
            self.counter_steps = COUNTER_STEPS;
        }
        if !(self.trail_decay_step > 0.0) {
            self.trail_decay_step = DEFAULT_TRAIL_DECAY_STEP;
        }
        if !self.holo_hue_min.is_finite() {
            self.holo_hue_min = HOLO_HUE_MIN;
        }
        if !(self.holo_hue_span.is_finite() && self.holo_hue_span >= 0.0) {
            self.holo_hue_span = HOLO_HUE_SPAN;
        }
        self
    }
}

/// Store the configuration from a JS object. Call before the module starts
/// its effects; later calls only affect effects mounted afterwards.
#[wasm_bindgen]
pub fn init_effects_config_js(value: JsValue) -> Result<(), JsValue> {
    let config = EffectsConfig::from_js(value)?;
    crate::debug_log!("Effects config from JS: {:?}", config);
    store(config);
    FROM_PAGE_SCRIPT.store(true, Ordering::SeqCst);
    Ok(())
}

/// Whether start-up should poll again after `elapsed_ms`.
pub fn keep_waiting(provided: bool, elapsed_ms: f64, budget_ms: u32) -> bool {
    !provided && elapsed_ms < budget_ms as f64
}

/// Give page scripts up to `budget_ms` to call `init_effects_config_js`.
/// Returns `true` when they did.
pub async fn wait_for_page_config(budget_ms: u32) -> bool {
    let start = js_sys::Date::now();
    loop {
        let provided = FROM_PAGE_SCRIPT.load(Ordering::SeqCst);
        if !keep_waiting(provided, js_sys::Date::now() - start, budget_ms) {
            return provided;
        }
        TimeoutFuture::new(CONFIG_POLL_MS).await;
    }
}

/// Resolve the configuration at start-up unless JS already provided one.
pub fn init_effects_config(document: &Document) {
    if is_initialised() {
        return;
    }
    let config = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .map(|json| match EffectsConfig::from_json_str(&json) {
            Ok(config) => config,
            Err(e) => {
                crate::warn_log!("Ignoring invalid #{}: {}", CONFIG_ELEMENT_ID, e);
                EffectsConfig::default()
            }
        })
        .unwrap_or_default();
    store(config.with_build_overrides());
}

/// Current configuration, or the defaults if none was stored.
pub fn effects_config() -> EffectsConfig {
    EFFECTS_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}

fn is_initialised() -> bool {
    EFFECTS_CONFIG
        .read()
        .map(|guard| guard.is_some())
        .unwrap_or(false)
}

fn store(config: EffectsConfig) {
    if let Ok(mut guard) = EFFECTS_CONFIG.write() {
        *guard = Some(config);
    }
}
