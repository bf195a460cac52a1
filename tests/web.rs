//! Browser tests; run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

use portfolio_frontend::config::{self, effects_config, init_effects_config_js};
use portfolio_frontend::constants::{CONFIG_WAIT_MS, NOTIFICATION_EXIT_MS, NOTIFICATION_LIFETIME_MS};
use portfolio_frontend::contact::ContactMessage;
use portfolio_frontend::effects::stats;
use portfolio_frontend::effects::typing::{TypingDelays, Typewriter, TypingLoop};
use portfolio_frontend::scheduler::{EffectRegistry, FrameLoop, IntervalTask, Listener};
use portfolio_frontend::storage::MemoryStore;
use portfolio_frontend::theme::{self, Theme};
use portfolio_frontend::toast::{self, NotificationKind};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn second_notification_replaces_the_first() {
    let doc = document();
    toast::emit("first", NotificationKind::Info);
    toast::emit("second", NotificationKind::Success);

    let shown = doc.query_selector_all(".cyber-notification").unwrap();
    assert_eq!(shown.length(), 1);
    let el = doc.query_selector(".cyber-notification").unwrap().unwrap();
    assert!(el.class_list().contains("notification-success"));
    assert_eq!(toast::current_message().as_deref(), Some("second"));
}

fn notification_style() -> Option<String> {
    document()
        .query_selector(".cyber-notification")
        .unwrap()
        .and_then(|el| el.get_attribute("style"))
}

#[wasm_bindgen_test]
async fn notification_slides_out_then_disappears() {
    toast::emit("fading", NotificationKind::Info);
    assert!(!notification_style().unwrap().contains("slideOutRight"));

    TimeoutFuture::new(NOTIFICATION_LIFETIME_MS + 100).await;
    assert!(notification_style().unwrap().contains("slideOutRight"));
    assert_eq!(toast::current_message().as_deref(), Some("fading"));

    TimeoutFuture::new(NOTIFICATION_EXIT_MS + 100).await;
    assert!(notification_style().is_none());
    assert_eq!(toast::current_message(), None);
}

#[wasm_bindgen_test]
async fn replaced_notification_keeps_its_own_lifetime() {
    toast::emit("old", NotificationKind::Info);
    TimeoutFuture::new(NOTIFICATION_LIFETIME_MS - 100).await;
    toast::emit("new", NotificationKind::Success);

    // Past the point where "old" would have been removed.
    TimeoutFuture::new(NOTIFICATION_EXIT_MS + 200).await;
    assert_eq!(toast::current_message().as_deref(), Some("new"));
    assert!(!notification_style().unwrap().contains("slideOutRight"));
    assert_eq!(document().query_selector_all(".cyber-notification").unwrap().length(), 1);
}

#[wasm_bindgen_test]
async fn stats_count_up_once_when_visible() {
    // Let the automatic start-up finish so it does not mount its own observer.
    TimeoutFuture::new(CONFIG_WAIT_MS + 200).await;

    let doc = document();
    let grid = doc.create_element("div").unwrap();
    grid.set_class_name("stats-grid");
    grid.set_attribute("style", "width:100px;height:100px;").unwrap();
    let stat = doc.create_element("span").unwrap();
    stat.set_class_name("stat-number");
    stat.set_attribute("data-target", "3").unwrap();
    stat.set_text_content(Some("0"));
    grid.append_child(&stat).unwrap();
    let body = doc.body().unwrap();
    body.prepend_with_node_1(&grid).unwrap();

    let observer = stats::mount(&doc, 3, 10).unwrap();
    assert!(observer.is_some());
    TimeoutFuture::new(300).await;
    assert_eq!(stat.text_content().as_deref(), Some("3"));

    // Leaving and re-entering the viewport does not replay the animation.
    stat.set_text_content(Some("reset"));
    grid.remove();
    TimeoutFuture::new(100).await;
    body.prepend_with_node_1(&grid).unwrap();
    TimeoutFuture::new(300).await;
    assert_eq!(stat.text_content().as_deref(), Some("reset"));

    drop(observer);
    grid.remove();
}

#[wasm_bindgen_test]
fn page_script_config_wins_over_inline_json() {
    let doc = document();
    let value = js_sys::JSON::parse(r#"{"particle_count": 7, "typing_char_delay_ms": 12}"#).unwrap();
    init_effects_config_js(value).unwrap();

    let inline = doc.create_element("script").unwrap();
    inline.set_id(config::CONFIG_ELEMENT_ID);
    inline.set_attribute("type", "application/json").unwrap();
    inline.set_text_content(Some(r#"{"particle_count": 9}"#));
    doc.body().unwrap().append_child(&inline).unwrap();
    config::init_effects_config(&doc);

    let current = effects_config();
    assert_eq!(current.particle_count, 7);
    assert_eq!(current.typing_delays().char_ms, 12);
    assert_eq!(current.notification_lifetime_ms, NOTIFICATION_LIFETIME_MS);
    inline.remove();
}

#[wasm_bindgen_test]
fn theme_toggle_round_trips_through_the_store() {
    let doc = document();
    let body = doc.body().unwrap();
    let button = doc.create_element("button").unwrap();
    button.set_id("theme-toggle");
    button.append_child(&doc.create_element("i").unwrap()).unwrap();
    body.append_child(&button).unwrap();

    let store = Rc::new(MemoryStore::default());
    let listener = theme::mount(&doc, store, Theme::Dark).unwrap();
    assert!(listener.is_some());
    let root = doc.document_element().unwrap();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

    let button: HtmlElement = button.dyn_into().unwrap();
    button.click();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    button.click();
    assert_eq!(root.get_attribute("data-theme").as_deref(), Some("dark"));

    drop(listener);
    button.remove();
}

#[wasm_bindgen_test]
fn mailto_link_is_uri_encoded() {
    let msg = ContactMessage {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        subject: "Hello & bye".into(),
        message: "hi".into(),
    };
    assert_eq!(
        msg.mailto("me@example.com"),
        "mailto:me@example.com?subject=Hello%20%26%20bye\
         &body=Name%3A%20Ada%0AEmail%3A%20ada%40example.com%0A%0AMessage%3A%0Ahi"
    );
}

#[wasm_bindgen_test]
async fn frame_loop_stops_ticking_after_stop() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = ticks.clone();
    let frames = FrameLoop::start(move |_| counter.set(counter.get() + 1)).unwrap();

    TimeoutFuture::new(200).await;
    assert!(frames.is_running());
    frames.stop();
    assert!(!frames.is_running());

    let seen = ticks.get();
    TimeoutFuture::new(100).await;
    assert_eq!(ticks.get(), seen);
}

#[wasm_bindgen_test]
async fn interval_task_fires_until_stopped() {
    let hits = Rc::new(Cell::new(0u32));
    let counter = hits.clone();
    let mut task = IntervalTask::every(20, move || counter.set(counter.get() + 1));

    TimeoutFuture::new(110).await;
    task.stop();
    let seen = hits.get();
    assert!(seen >= 2);
    TimeoutFuture::new(60).await;
    assert_eq!(hits.get(), seen);
}

#[wasm_bindgen_test]
async fn typing_loop_writes_into_target() {
    let doc = document();
    let target = doc.create_element("span").unwrap();
    let writer = Typewriter::new(vec!["AB".into()], TypingDelays::default());
    let typing = TypingLoop::start(target.clone(), writer);

    // Initial 1000ms delay, then one character per 100ms.
    TimeoutFuture::new(1_150).await;
    let typed = target.text_content().unwrap_or_default();
    assert!(typed.starts_with('A'));
    typing.stop();
    assert!(!typing.is_running());
}

#[wasm_bindgen_test]
fn stop_all_detaches_listeners() {
    let doc = document();
    let button: HtmlElement = doc.create_element("button").unwrap().dyn_into().unwrap();
    doc.body().unwrap().append_child(&button).unwrap();

    let clicks = Rc::new(Cell::new(0u32));
    let counter = clicks.clone();
    let mut registry = EffectRegistry::new();
    registry.register(
        "probe",
        Listener::new(&button, "click", move |_| counter.set(counter.get() + 1)).unwrap(),
    );
    button.click();
    assert_eq!(clicks.get(), 1);

    registry.stop_all();
    assert!(registry.is_empty());
    button.click();
    assert_eq!(clicks.get(), 1);
    button.remove();
}
