//! Small crate-wide convenience macros.

/// Log to the browser console in debug builds only.
///
/// ```rust,ignore
/// debug_log!("mounted {} particles", count);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
    };
}

/// Warn on the console; used wherever a DOM write fails and the effect simply
/// carries on without it.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        web_sys::console::warn_1(&format!($($arg)*).into())
    };
}
