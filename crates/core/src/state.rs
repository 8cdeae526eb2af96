use crate::fill::{fill_level, transition_for, Transition, FULL_LEVEL};
use chrono::{NaiveTime, Timelike};

/// Everything the clock face needs to paint one frame.
///
/// Colours are not stored here: the compiled theme resolves `transition` to a
/// concrete colour at paint time, so a config reload recolours immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    /// Formatted time, e.g. `"09:41"`.
    pub text: String,
    /// Fill level in `0..=6`; see [`fill_level`].
    pub level: u8,
    /// Tint below the split point.
    pub transition: Transition,
    /// Time of the most recent tick.
    pub time: NaiveTime,
}

impl Default for ClockState {
    fn default() -> Self {
        Self {
            text: String::new(),
            level: FULL_LEVEL,
            transition: Transition::Idle,
            time: NaiveTime::MIN,
        }
    }
}

impl ClockState {
    /// Build the state for `time`, formatted with a chrono `pattern`.
    #[must_use]
    pub fn at(time: NaiveTime, pattern: &str) -> Self {
        let mut state = Self::default();
        state.tick(time, pattern);
        state
    }

    /// Advance to `time`.  Returns `true` when anything visible changed and
    /// the face needs repainting.
    pub fn tick(&mut self, time: NaiveTime, pattern: &str) -> bool {
        let text = time.format(pattern).to_string();
        let level = fill_level(time.second());
        let transition = transition_for(level);

        let changed = text != self.text || level != self.level || transition != self.transition;

        self.text = text;
        self.level = level;
        self.transition = transition;
        self.time = time;

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn default_is_full_and_idle() {
        let state = ClockState::default();
        assert_eq!(state.level, 6);
        assert_eq!(state.transition, Transition::Idle);
        assert!(state.text.is_empty());
    }

    #[test]
    fn formats_short_and_long_patterns() {
        assert_eq!(ClockState::at(t(9, 5, 7), "%H:%M").text, "09:05");
        assert_eq!(ClockState::at(t(21, 45, 3), "%H:%M:%S").text, "21:45:03");
    }

    #[test]
    fn tick_tracks_level_and_tint() {
        let mut state = ClockState::at(t(12, 0, 0), "%H:%M");
        assert_eq!((state.level, state.transition), (6, Transition::Idle));

        state.tick(t(12, 0, 25), "%H:%M");
        assert_eq!((state.level, state.transition), (4, Transition::Accent));

        state.tick(t(12, 0, 59), "%H:%M");
        assert_eq!(state.level, 1);
    }

    #[test]
    fn tick_reports_visible_changes_only() {
        let mut state = ClockState::at(t(12, 0, 11), "%H:%M");
        // Same level, same minute: nothing to repaint.
        assert!(!state.tick(t(12, 0, 12), "%H:%M"));
        // Level boundary.
        assert!(state.tick(t(12, 0, 20), "%H:%M"));
        // Seconds pattern changes text every tick.
        assert!(state.tick(t(12, 0, 21), "%H:%M:%S"));
        assert_eq!(state.time, t(12, 0, 21));
    }
}
