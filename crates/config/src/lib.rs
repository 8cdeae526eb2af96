pub mod schema;
pub mod watcher;

pub use schema::{
    BehaviorConfig, ClockConfig, ColorConfig, Corner, DisplayConfig, DisplayFormat, ResetPolicy,
    WindowConfig,
};
pub use watcher::ConfigWatcher;

use fillclock_core::{ClockError, Result};
use std::path::{Path, PathBuf};

/// Read the clock settings from `path`.
///
/// A missing file is not an error: a fresh install shows the white/orange
/// clock in the top-right corner.  A file that exists but cannot be read or
/// parsed is a [`ClockError::Config`], so callers can keep their last good
/// settings.
pub fn load(path: impl AsRef<Path>) -> Result<ClockConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(ClockConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| ClockError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| ClockError::Config(format!("TOML parse error: {e}")))
}

/// `fillclock/fillclock.toml` under `$XDG_CONFIG_HOME`, or `~/.config` when
/// that is unset.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("fillclock").join("fillclock.toml")
}
