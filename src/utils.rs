//! Utility helpers shared across the WASM frontend.

use chrono::Timelike;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Return the current timestamp in **milliseconds** since UNIX epoch.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// A fresh `SmallRng` seeded from `Math.random()` mixed with the clock.
///
/// Browser builds have no OS entropy source without extra glue; visual noise
/// does not need one.
pub fn browser_rng() -> SmallRng {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    SmallRng::seed_from_u64((noise << 32) ^ now_ms())
}

/// Render a wall-clock time as 24-hour `HH:MM:SS`.
pub fn format_clock<T: Timelike>(time: &T) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        time.hour(),
        time.minute(),
        time.second()
    )
}

/// Page load duration from the two navigation-timing marks. `None` while the
/// load event has not finished.
pub fn page_load_ms(navigation_start: f64, load_event_end: f64) -> Option<u64> {
    if load_event_end <= 0.0 || load_event_end < navigation_start {
        return None;
    }
    Some((load_event_end - navigation_start) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn clock_is_zero_padded_24h() {
        let t = NaiveTime::from_hms_opt(7, 5, 9).unwrap();
        assert_eq!(format_clock(&t), "07:05:09");
        let t = NaiveTime::from_hms_opt(23, 59, 0).unwrap();
        assert_eq!(format_clock(&t), "23:59:00");
    }

    #[test]
    fn load_time_requires_finished_load_event() {
        assert_eq!(page_load_ms(1_000.0, 0.0), None);
        assert_eq!(page_load_ms(1_000.0, 1_742.0), Some(742));
    }
}
