//! Console greeting and the page-load timing line.

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::{console, Document, Window};

use crate::dom_utils::run_after;
use crate::scheduler::Listener;
use crate::utils::page_load_ms;

const BANNER: &str = "
%c╔═══════════════════════════════════════════════════════════╗
║                                                           ║
║    ██████╗██╗   ██╗██████╗ ███████╗██████╗              ║
║   ██╔════╝╚██╗ ██╔╝██╔══██╗██╔════╝██╔══██╗             ║
║   ██║      ╚████╔╝ ██████╔╝█████╗  ██████╔╝             ║
║   ██║       ╚██╔╝  ██╔══██╗██╔══╝  ██╔══██╗             ║
║   ╚██████╗   ██║   ██████╔╝███████╗██║  ██║             ║
║    ╚═════╝   ╚═╝   ╚═════╝ ╚══════╝╚═╝  ╚═╝             ║
║                                                           ║
║   PORTFOLIO v2.0.77 // NEURAL_INTERFACE_ACTIVE           ║
║   SYSTEM_STATUS: ONLINE // ALL_SYSTEMS_GO                ║
║                                                           ║
╚═══════════════════════════════════════════════════════════╝

%c[INIT] Loading AI/ML Engineer profile...
%c[OK] Prakhar Kothari - Neural link established
%c[INFO] GitHub: github.com/prakhar175
%c[WARNING] Impressive cyberpunk portfolio detected!
%c[SUCCESS] Portfolio systems initialized. Welcome to the future.
";

const BANNER_STYLES: [&str; 6] = [
    "color: #00f0ff; font-family: monospace; font-size: 10px;",
    "color: #00ff9f; font-family: monospace;",
    "color: #b026ff; font-family: monospace;",
    "color: #ff006e; font-family: monospace;",
    "color: #ffed4e; font-family: monospace;",
    "color: #00ff9f; font-weight: bold; font-family: monospace;",
];

/// `console.log(text, ...styles)` for `%c` formatted output.
pub fn styled_log(text: &str, styles: &[&str]) {
    let args = Array::new();
    args.push(&JsValue::from_str(text));
    for style in styles {
        args.push(&JsValue::from_str(style));
    }
    console::log(&args);
}

pub fn print_banner() {
    styled_log(BANNER, &BANNER_STYLES);
}

pub fn print_ready() {
    styled_log(
        "%c[SUCCESS] CYBERPUNK ENHANCED v2.0.77 // All systems operational",
        &["color: #00ff9f; font-weight: bold; font-size: 14px;"],
    );
}

fn report_load_time(window: &Window) {
    let Some(performance) = window.performance() else {
        return;
    };
    #[allow(deprecated)]
    let timing = performance.timing();
    let start = timing.navigation_start() as f64;
    let end = timing.load_event_end() as f64;
    if let Some(ms) = page_load_ms(start, end) {
        styled_log(
            &format!("%c[PERFORMANCE] Page loaded in {}ms", ms),
            &["color: #00f0ff; font-weight: bold;"],
        );
    }
}

/// Log the load duration once `loadEventEnd` is populated, which is only
/// after every `load` handler has returned. The module usually finishes
/// instantiating after `load`, in which case the report runs right away.
pub fn mount_load_timing(window: &Window, document: &Document) -> Result<Option<Listener>, JsValue> {
    let win = window.clone();
    if document.ready_state() == "complete" {
        run_after(0, move || report_load_time(&win));
        return Ok(None);
    }
    let listener = Listener::new(window, "load", move |_| {
        let win = win.clone();
        run_after(0, move || report_load_time(&win));
    })?;
    Ok(Some(listener))
}
