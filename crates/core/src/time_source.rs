use chrono::{Local, NaiveTime};

/// Supplies the wall-clock time the clock displays.
///
/// The window uses [`SystemClock`]; tests pin the time with [`FixedClock`].
pub trait TimeSource: std::fmt::Debug {
    fn now(&self) -> NaiveTime;
}

/// Local time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveTime);

impl FixedClock {
    /// Returns `None` for an invalid hour/minute/second triple.
    #[must_use]
    pub fn hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }
}

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
