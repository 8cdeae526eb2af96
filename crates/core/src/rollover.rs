use chrono::{NaiveTime, Timelike};

/// Detects when the wall clock enters a new minute relative to the minute the
/// guard was armed in.
///
/// The forced tick issued at startup never triggers, matching the behaviour of
/// a freshly started clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolloverGuard {
    start_minute: u32,
}

impl RolloverGuard {
    #[must_use]
    pub fn new(armed_at: NaiveTime) -> Self {
        Self {
            start_minute: armed_at.minute(),
        }
    }

    /// `true` when `time` is second zero of a minute other than the armed one.
    #[must_use]
    pub fn observe(&self, time: NaiveTime, forced: bool) -> bool {
        !forced && time.second() == 0 && time.minute() != self.start_minute
    }

    /// Start counting from the minute of `time`.
    pub fn rearm(&mut self, time: NaiveTime) {
        self.start_minute = time.minute();
    }

    #[must_use]
    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }
}
