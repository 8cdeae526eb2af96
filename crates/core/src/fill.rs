//! Mapping from wall-clock seconds to the discrete fill level.
//!
//! A minute is split into six ten-second steps.  The level starts at
//! [`FULL_LEVEL`] on the minute and drops by one every ten seconds, so the
//! accent colour climbs a sixth of the digits at a time.

/// Level shown during the first ten seconds of a minute (no accent visible).
pub const FULL_LEVEL: u8 = 6;

/// Seconds spent on each level.
const SECONDS_PER_LEVEL: u32 = 10;

/// Which colour paints the lower part of the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transition {
    /// First ten seconds of the minute: lower part uses the idle colour.
    #[default]
    Idle,
    /// Rest of the minute: lower part uses the accent colour.
    Accent,
}

/// `6 - seconds / 10`, saturating at zero for out-of-range input (leap second).
#[must_use]
pub fn fill_level(seconds: u32) -> u8 {
    let elapsed = (seconds / SECONDS_PER_LEVEL).min(u32::from(FULL_LEVEL));
    // `elapsed` ≤ 6 so the narrowing cast is lossless.
    FULL_LEVEL - elapsed as u8
}

/// The tint that applies below the split point for a given level.
#[must_use]
pub fn transition_for(level: u8) -> Transition {
    if level >= FULL_LEVEL {
        Transition::Idle
    } else {
        Transition::Accent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_is_a_ten_second_step_function() {
        for s in 0..60 {
            let expected = 6 - (s / 10) as u8;
            assert_eq!(fill_level(s), expected, "second {s}");
        }
        assert_eq!(fill_level(9), 6);
        assert_eq!(fill_level(10), 5);
        assert_eq!(fill_level(59), 1);
    }

    #[test]
    fn leap_second_saturates_to_zero() {
        assert_eq!(fill_level(60), 0);
        assert_eq!(fill_level(u32::MAX), 0);
    }

    #[test]
    fn accent_only_after_first_ten_seconds() {
        assert_eq!(transition_for(fill_level(0)), Transition::Idle);
        assert_eq!(transition_for(fill_level(9)), Transition::Idle);
        assert_eq!(transition_for(fill_level(10)), Transition::Accent);
        assert_eq!(transition_for(0), Transition::Accent);
    }
}
