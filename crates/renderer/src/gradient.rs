use fillclock_core::FULL_LEVEL;
use fillclock_theme::Color;

/// Width of the blend between the base and transition colours.
const BLEND: f32 = 0.01;

/// One `(offset, colour)` boundary of a vertical linear gradient.
/// Offset `0.0` is the top of the text box, `1.0` the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color:  Color,
}

impl GradientStop {
    #[must_use]
    pub const fn new(offset: f32, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Ordered gradient stops.  The first offset is `0.0`, the last `1.0`, and
/// offsets never decrease.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    stops: Vec<GradientStop>,
}

impl GradientSpec {
    #[must_use]
    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// `true` when every stop has the same colour.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.stops.windows(2).all(|w| w[0].color == w[1].color)
    }
}

/// Gradient for a fill level.
///
/// The split points are hand-tuned rather than linear in `level`: levels 5
/// and 1 snap to 0.78 and 0.23, levels 2–4 snap to `level / 6`.  Level 0 uses
/// the general formula and collapses three stops onto offset 0.
#[must_use]
pub fn compute_stops(level: u8, base: Color, transition: Color) -> GradientSpec {
    let split = |hold: f32, snap: f32| {
        vec![
            GradientStop::new(0.0, base),
            GradientStop::new(hold, base),
            GradientStop::new(snap, transition),
            GradientStop::new(1.0, transition),
        ]
    };

    let stops = match level {
        l if l >= FULL_LEVEL => vec![GradientStop::new(0.0, base), GradientStop::new(1.0, base)],
        5 => split(0.77, 0.78),
        1 => split(0.22, 0.23),
        l => {
            let ratio = f32::from(l) / f32::from(FULL_LEVEL);
            split((ratio - BLEND).max(0.0), ratio)
        }
    };

    GradientSpec { stops }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: Color = Color::WHITE;
    const ACCENT: Color = Color::ORANGE;

    fn offsets(spec: &GradientSpec) -> Vec<f32> {
        spec.stops().iter().map(|s| s.offset).collect()
    }

    fn colors(spec: &GradientSpec) -> Vec<Color> {
        spec.stops().iter().map(|s| s.color).collect()
    }

    #[test]
    fn full_level_is_flat_base() {
        for level in [6, 7, u8::MAX] {
            let spec = compute_stops(level, BASE, ACCENT);
            assert_eq!(offsets(&spec), vec![0.0, 1.0]);
            assert_eq!(colors(&spec), vec![BASE, BASE]);
            assert!(spec.is_flat());
        }
    }

    #[test]
    fn level_five_uses_hand_tuned_split() {
        let spec = compute_stops(5, BASE, ACCENT);
        assert_eq!(offsets(&spec), vec![0.0, 0.77, 0.78, 1.0]);
        assert_eq!(colors(&spec), vec![BASE, BASE, ACCENT, ACCENT]);
    }

    #[test]
    fn level_one_uses_hand_tuned_split() {
        let spec = compute_stops(1, BASE, ACCENT);
        assert_eq!(offsets(&spec), vec![0.0, 0.22, 0.23, 1.0]);
        assert_eq!(colors(&spec), vec![BASE, BASE, ACCENT, ACCENT]);
    }

    #[test]
    fn middle_levels_snap_to_sixths() {
        for level in 2..=4u8 {
            let spec = compute_stops(level, BASE, ACCENT);
            let ratio = f32::from(level) / 6.0;
            let stops = spec.stops();
            assert_eq!(stops.len(), 4);
            assert!((stops[2].offset - ratio).abs() <= 0.01, "level {level}");
            assert_eq!(stops[1].offset, (ratio - 0.01).max(0.0));
            assert_eq!(stops[1].color, BASE);
            assert_eq!(stops[2].color, ACCENT);
            assert_eq!(stops[3].offset, 1.0);
        }
    }

    #[test]
    fn level_zero_keeps_degenerate_stops() {
        let spec = compute_stops(0, BASE, ACCENT);
        assert_eq!(offsets(&spec), vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(colors(&spec), vec![BASE, BASE, ACCENT, ACCENT]);
    }

    #[test]
    fn offsets_are_bounded_and_non_decreasing() {
        for level in 0..=6u8 {
            let spec = compute_stops(level, BASE, ACCENT);
            let o = offsets(&spec);
            assert_eq!(o.first(), Some(&0.0));
            assert_eq!(o.last(), Some(&1.0));
            assert!(o.windows(2).all(|w| w[0] <= w[1]), "level {level}");
            if level > 0 {
                assert!(o.windows(2).all(|w| w[0] < w[1]), "level {level}");
            }
        }
    }

    #[test]
    fn one_minute_of_seconds_walks_through_every_gradient() {
        use fillclock_core::fill_level;

        let expected: [&[f32]; 6] = [
            &[0.0, 1.0],
            &[0.0, 0.77, 0.78, 1.0],
            &[0.0, 4.0 / 6.0 - 0.01, 4.0 / 6.0, 1.0],
            &[0.0, 3.0 / 6.0 - 0.01, 3.0 / 6.0, 1.0],
            &[0.0, 2.0 / 6.0 - 0.01, 2.0 / 6.0, 1.0],
            &[0.0, 0.22, 0.23, 1.0],
        ];

        for (i, seconds) in (0..60).step_by(10).enumerate() {
            let spec = compute_stops(fill_level(seconds), BASE, ACCENT);
            let got = offsets(&spec);
            assert_eq!(got.len(), expected[i].len(), "second {seconds}");
            for (g, e) in got.iter().zip(expected[i]) {
                assert!((g - e).abs() < 1e-6, "second {seconds}: {g} vs {e}");
            }
        }
    }
}
