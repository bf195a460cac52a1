use gloo_timers::callback::Interval;

/// Fixed-period callback; cancelled by `stop()` or on drop.
pub struct IntervalTask {
    interval: Option<Interval>,
}

impl IntervalTask {
    pub fn every<F>(period_ms: u32, callback: F) -> IntervalTask
    where
        F: FnMut() + 'static,
    {
        IntervalTask {
            interval: Some(Interval::new(period_ms, callback)),
        }
    }

    pub fn stop(&mut self) {
        // Dropping an `Interval` clears it.
        self.interval = None;
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }
}
