use serde::{Deserialize, Serialize};

/// Root configuration structure parsed from `fillclock.toml`.
///
/// Every section is optional; missing keys take the defaults below, which
/// reproduce the classic white-and-orange clock in the top-right corner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Window geometry and placement.
    pub window: WindowConfig,
    /// Text format and font.
    pub display: DisplayConfig,
    /// Fill, accent and outline colours.
    pub colors: ColorConfig,
    /// Periodic state reset.
    pub behavior: BehaviorConfig,
}

/// Window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Screen corner the window starts in.
    pub corner: Corner,
    /// Window width in logical pixels.
    pub width: u32,
    /// Window height in logical pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            corner: Corner::TopRight,
            width:  300,
            height: 100,
        }
    }
}

/// Screen corner used for the initial window position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Text settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `"hh:mm"` or `"hh:mm:ss"`.
    pub format: DisplayFormat,
    /// Font family name.  `"monospace"`, `"serif"` and `"sans-serif"` select
    /// the generic families.
    pub font: String,
    /// Font size in points.
    pub font_size: f32,
    /// Render the digits in bold.
    pub bold: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format:    DisplayFormat::HourMinute,
            font:      "Arial".to_string(),
            font_size: 50.0,
            bold:      true,
        }
    }
}

/// How much of the time is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DisplayFormat {
    #[default]
    #[serde(rename = "hh:mm")]
    HourMinute,
    #[serde(rename = "hh:mm:ss")]
    HourMinuteSecond,
}

impl DisplayFormat {
    /// The chrono format pattern for this display format.
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::HourMinute       => "%H:%M",
            Self::HourMinuteSecond => "%H:%M:%S",
        }
    }
}

/// Colour settings (hex strings, `#RRGGBB` or `#RRGGBBAA`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Colour above the split point.
    pub base: String,
    /// Colour below the split point during the first ten seconds.
    pub idle: String,
    /// Colour below the split point for the rest of the minute.
    pub accent: String,
    /// Outline colour.  Empty = no outline.
    pub outline: String,
    /// Outline thickness in logical pixels.
    pub outline_width: f32,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            base:          "#ffffff".to_string(),
            idle:          "#ffffff".to_string(),
            accent:        "#ffa500".to_string(),
            outline:       String::new(),
            outline_width: 2.0,
        }
    }
}

/// Behaviour settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    pub reset: ResetPolicy,
}

/// Whether the clock rebuilds its state when the minute rolls over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ResetPolicy {
    #[default]
    Never,
    EveryMinute,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let cfg: ClockConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, ClockConfig::default());
        assert_eq!(cfg.window.corner, Corner::TopRight);
        assert_eq!(cfg.display.format, DisplayFormat::HourMinute);
        assert_eq!(cfg.behavior.reset, ResetPolicy::Never);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let cfg: ClockConfig = toml::from_str(
            r##"
            [window]
            corner = "bottom-left"

            [display]
            format = "hh:mm:ss"
            font_size = 32.0

            [colors]
            accent = "#00ff00"
            outline = "#000000"

            [behavior]
            reset = "every-minute"
            "##,
        )
        .unwrap();

        assert_eq!(cfg.window.corner, Corner::BottomLeft);
        assert_eq!(cfg.window.width, 300);
        assert_eq!(cfg.display.format, DisplayFormat::HourMinuteSecond);
        assert_eq!(cfg.display.font_size, 32.0);
        assert_eq!(cfg.display.font, "Arial");
        assert_eq!(cfg.colors.accent, "#00ff00");
        assert_eq!(cfg.colors.outline, "#000000");
        assert_eq!(cfg.colors.base, "#ffffff");
        assert_eq!(cfg.behavior.reset, ResetPolicy::EveryMinute);
    }

    #[test]
    fn unknown_corner_is_rejected() {
        let res: Result<ClockConfig, _> = toml::from_str("[window]\ncorner = \"middle\"\n");
        assert!(res.is_err());
    }

    #[test]
    fn format_patterns() {
        assert_eq!(DisplayFormat::HourMinute.pattern(), "%H:%M");
        assert_eq!(DisplayFormat::HourMinuteSecond.pattern(), "%H:%M:%S");
    }
}
