use std::time::{Duration, Instant};

use fps_counter::FPSCounter;

/// Reports the presented-frame rate once per interval.
///
/// Fed with the running count of submitted frames; callbacks that skipped
/// their frame leave the count unchanged and are not ticked.
pub struct FrameRateMeter {
    counter: FPSCounter,
    interval: Duration,
    last_report: Option<Instant>,
    last_submitted: u64,
    ticks: u64,
}

impl FrameRateMeter {
    pub fn new(interval: Duration) -> Self {
        Self {
            counter: FPSCounter::new(),
            interval,
            last_report: None,
            last_submitted: 0,
            ticks: 0,
        }
    }

    /// Frames the meter has counted so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Observes the submitted-frame total after a redraw callback.
    ///
    /// Returns the frames presented over the last second once a full
    /// interval has passed since the previous report.
    pub fn observe(&mut self, submitted: u64, now: Instant) -> Option<usize> {
        if submitted == self.last_submitted {
            return None;
        }
        self.last_submitted = submitted;
        self.ticks += 1;

        let fps = self.counter.tick();

        let start = *self.last_report.get_or_insert(now);
        if now.saturating_duration_since(start) < self.interval {
            return None;
        }

        self.last_report = Some(now);
        Some(fps)
    }
}

impl Default for FrameRateMeter {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
