use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub mod banner;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod contact;
pub mod dom_utils;
pub mod effects;
pub mod macros;
pub mod scheduler;
pub mod storage;
pub mod theme;
pub mod toast;
pub mod utils;

use config::EffectsConfig;
use effects::{ambient, konami, nav, parallax, reveal, stats, tilt, typing};
use scheduler::EffectRegistry;
use storage::LocalStore;

thread_local! {
    // Everything started by `start()`; lives as long as the page unless
    // `teardown_effects()` is called.
    static REGISTRY: RefCell<EffectRegistry> = RefCell::new(EffectRegistry::new());
}

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = dom_utils::window()?;
    let document = dom_utils::document()?;

    // This runs while the module is instantiated, before the page script
    // that loaded it gets a chance to call `init_effects_config_js`.
    wasm_bindgen_futures::spawn_local(async move {
        if !config::wait_for_page_config(constants::CONFIG_WAIT_MS).await {
            debug_log!("No config from page script, using #fx-config or defaults");
        }
        boot(&window, &document);
    });
    Ok(())
}

fn boot(window: &Window, document: &Document) {
    config::init_effects_config(document);
    let config = config::effects_config();

    banner::print_banner();

    let mut registry = EffectRegistry::new();
    mount_all(window, document, &config, &mut registry);
    debug_log!("{} effect handles registered", registry.len());

    REGISTRY.with(|cell| {
        let mut current = cell.borrow_mut();
        current.stop_all();
        *current = registry;
    });

    banner::print_ready();
}

/// Stop every animation loop and timer and detach all listeners.
#[wasm_bindgen]
pub fn teardown_effects() {
    REGISTRY.with(|cell| cell.borrow_mut().stop_all());
}

/// Names of the running effects, in start-up order.
#[wasm_bindgen]
pub fn active_effects() -> Vec<JsValue> {
    REGISTRY.with(|cell| {
        cell.borrow()
            .active_names()
            .into_iter()
            .map(JsValue::from_str)
            .collect()
    })
}

/// Show a notification from page scripts. `kind` is `"success"` or `"info"`.
#[wasm_bindgen]
pub fn show_notification(message: &str, kind: &str) {
    let kind = match kind {
        "success" => toast::NotificationKind::Success,
        _ => toast::NotificationKind::Info,
    };
    toast::emit(message, kind);
}

// An effect that fails to mount is logged and skipped; the rest still start.
fn mounted<T>(name: &str, result: Result<T, JsValue>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn_log!("Skipping {}: {:?}", name, e);
            None
        }
    }
}

fn mount_all(window: &Window, document: &Document, config: &EffectsConfig, registry: &mut EffectRegistry) {
    let store = Rc::new(LocalStore);
    if let Some(Some(listener)) = mounted("theme", theme::mount(document, store, config.default_theme)) {
        registry.register("theme", listener);
    }

    if let Some(handles) = mounted("particles", canvas::mount_particles(window, document, config)) {
        registry.extend("particles", handles);
    }
    if let Some(handles) = mounted("cursor-trail", canvas::mount_trail(window, document, config)) {
        registry.extend("cursor-trail", handles);
    }

    registry.register("clock", ambient::start_clock(document.clone(), config.clock_period_ms));

    if let Some(target) = dom_utils::query_one(document, ".typing-text") {
        let writer = typing::Typewriter::new(config.roles.clone(), config.typing_delays());
        registry.register("typing", typing::TypingLoop::start(target, writer));
    }

    if let Some(listeners) = mounted("mobile-menu", nav::mount_mobile_menu(document)) {
        registry.extend("mobile-menu", listeners);
    }
    if let Some(Some(listener)) = mounted("scroll-spy", nav::mount_scroll_spy(window, document)) {
        registry.register("scroll-spy", listener);
    }
    if let Some(listeners) = mounted("smooth-scroll", nav::mount_smooth_scroll(window, document)) {
        registry.extend("smooth-scroll", listeners);
    }
    if let Some(listener) = mounted("parallax", parallax::mount(window, document)) {
        registry.register("parallax", listener);
    }

    let counters = stats::mount(document, config.counter_steps, config.counter_step_ms);
    if let Some(Some(observer)) = mounted("stats", counters) {
        registry.register("stats", observer);
    }

    if let Some(Some(handle)) = mounted("reveal", reveal::mount_panels(window, document)) {
        registry.register("reveal", handle);
    }
    if let Some(Some(observer)) = mounted("project-cards", reveal::mount_projects(document)) {
        registry.register("project-cards", observer);
    }

    if let Some(listeners) = mounted("tilt", tilt::mount_cards(document)) {
        registry.extend("tilt", listeners);
    }
    if let Some(Some(listener)) = mounted("image-frame", tilt::mount_image_frame(window, document)) {
        registry.register("image-frame", listener);
    }

    registry.register("glitch", ambient::start_glitch(document.clone(), config));
    registry.register(
        "holographic",
        ambient::start_holographic(document.clone(), config),
    );

    let contact_form = contact::mount(window, document, config.contact_email.clone());
    if let Some(Some(listener)) = mounted("contact", contact_form) {
        registry.register("contact", listener);
    }
    if let Some(listener) = mounted("konami", konami::mount(document)) {
        registry.register("konami", listener);
    }
    if let Some(Some(listener)) = mounted("load-timing", banner::mount_load_timing(window, document)) {
        registry.register("load-timing", listener);
    }
}
