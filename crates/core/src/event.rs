/// Messages that flow from background sources into the clock window.
///
/// Sources:
/// - Timer subscription    → `Tick`
/// - Config watcher task   → `ConfigReloaded`
/// - Rollover guard        → `ResetRequested`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// One-second timer tick — re-reads the time and advances the fill.
    Tick,
    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,
    /// The minute rolled over and the reset policy asks for a clean slate.
    ResetRequested,
}
