//! `fillclock` binary: sets up logging and opens the clock window.
//!
//! Settings are read from `$XDG_CONFIG_HOME/fillclock/fillclock.toml` and
//! reloaded on change; log verbosity follows `RUST_LOG`, e.g.
//! `RUST_LOG=fillclock_window=debug fillclock` to trace drags and reloads.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Config fallbacks and reset notices log at info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("fillclock v{} starting", env!("CARGO_PKG_VERSION"));

    fillclock_window::run().map_err(Into::into)
}
