pub mod colors;
mod fonts;

pub use colors::Color;

use fillclock_config::ClockConfig;
use fillclock_core::Transition;

/// Stroke drawn around the digits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    pub color: Color,
    /// Thickness in logical pixels.
    pub width: f32,
}

/// Compiled theme derived from [`ClockConfig`].
///
/// All colors are pre-parsed from hex strings into normalised `[0, 1]` RGBA.
/// Calling [`Theme::from_config`] is infallible — invalid color strings fall
/// back to the classic white/orange palette.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Colour above the split point.
    pub base:      Color,
    /// Colour below the split point during the first ten seconds.
    pub idle:      Color,
    /// Colour below the split point for the rest of the minute.
    pub accent:    Color,
    /// `None` = no outline.
    pub outline:   Option<Outline>,
    pub font:      iced::Font,
    pub font_size: f32,
    /// chrono format pattern for the displayed time.
    pub pattern:   &'static str,
}

impl Theme {
    /// Build a [`Theme`] from the whole config file.
    pub fn from_config(cfg: &ClockConfig) -> Self {
        let colors = &cfg.colors;

        let outline = if colors.outline.trim().is_empty() || colors.outline_width <= 0.0 {
            None
        } else {
            Color::from_hex(&colors.outline).map(|color| Outline {
                color,
                width: colors.outline_width,
            })
        };

        Self {
            base:      parse_or(&colors.base, Color::WHITE, "base"),
            idle:      parse_or(&colors.idle, Color::WHITE, "idle"),
            accent:    parse_or(&colors.accent, Color::ORANGE, "accent"),
            outline,
            font:      fonts::resolve(&cfg.display.font, cfg.display.bold),
            font_size: cfg.display.font_size.max(1.0),
            pattern:   cfg.display.format.pattern(),
        }
    }

    /// Concrete colour for the part of the digits below the split point.
    #[must_use]
    pub fn transition_color(&self, transition: Transition) -> Color {
        match transition {
            Transition::Idle   => self.idle,
            Transition::Accent => self.accent,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ClockConfig::default())
    }
}

fn parse_or(hex: &str, fallback: Color, field: &str) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        tracing::warn!("Invalid {field} colour '{hex}'; using default");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use fillclock_config::DisplayFormat;

    #[test]
    fn default_theme_is_white_and_orange() {
        let theme = Theme::default();
        assert_eq!(theme.base, Color::WHITE);
        assert_eq!(theme.transition_color(Transition::Idle), Color::WHITE);
        assert_eq!(theme.transition_color(Transition::Accent), Color::from_hex("#ffa500").unwrap());
        assert!(theme.outline.is_none());
        assert_eq!(theme.pattern, "%H:%M");
        assert_eq!(theme.font_size, 50.0);
    }

    #[test]
    fn invalid_colours_fall_back() {
        let mut cfg = ClockConfig::default();
        cfg.colors.base = "not-a-colour".into();
        cfg.colors.accent = "#12".into();
        let theme = Theme::from_config(&cfg);
        assert_eq!(theme.base, Color::WHITE);
        assert_eq!(theme.accent, Color::ORANGE);
    }

    #[test]
    fn outline_requires_colour_and_width() {
        let mut cfg = ClockConfig::default();
        cfg.colors.outline = "#000000".into();
        cfg.colors.outline_width = 3.0;
        let outline = Theme::from_config(&cfg).outline.unwrap();
        assert_eq!(outline.color, Color::BLACK);
        assert_eq!(outline.width, 3.0);

        cfg.colors.outline_width = 0.0;
        assert!(Theme::from_config(&cfg).outline.is_none());
    }

    #[test]
    fn seconds_format_selects_long_pattern() {
        let mut cfg = ClockConfig::default();
        cfg.display.format = DisplayFormat::HourMinuteSecond;
        assert_eq!(Theme::from_config(&cfg).pattern, "%H:%M:%S");
    }
}
