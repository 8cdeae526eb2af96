//! Desktop window for `fillclock`.
//!
//! Owns the Iced application loop and wires together:
//! - 1-second timer (clock and fill level)
//! - primary-button presses (OS-level window drag)
//! - config file watcher (live reload on change)
//! - minute-rollover reset, when enabled in the config

pub mod placement;

use fillclock_config::{default_path, load as load_config, ClockConfig, ConfigWatcher, ResetPolicy, WindowConfig};
use fillclock_core::{
    event::Message as AppMessage, ClockError, ClockState, Result, RolloverGuard, SystemClock,
    TimeSource,
};
use fillclock_theme::Theme;
use fillclock_widgets::GradientClock;
use futures::channel::mpsc::Sender;
use iced::{
    event, mouse,
    widget::container,
    window, Element, Event, Length, Size, Subscription, Task,
};
use chrono::NaiveTime;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the clock window.  Returns when the window is closed; toolkit
/// start-up failures surface as [`ClockError::Window`].
pub fn run() -> Result<()> {
    let path = default_path();
    let config = load_or_default(&path);
    let settings = window_settings(&config.window);

    iced::application(
        move || Clock::new(config.clone(), path.clone()),
        Clock::update,
        Clock::view,
    )
    .title("fillclock")
    .subscription(Clock::subscription)
    .style(Clock::style)
    .window(settings)
    .run()
    .map_err(|e| ClockError::Window(e.to_string()))
}

/// Borderless, transparent, always-on-top and anchored to the configured corner.
fn window_settings(cfg: &WindowConfig) -> window::Settings {
    window::Settings {
        size: Size::new(cfg.width as f32, cfg.height as f32),
        position: window::Position::SpecificWith(placement::position_fn(cfg.corner)),
        resizable: false,
        decorations: false,
        transparent: true,
        level: window::Level::AlwaysOnTop,
        ..Default::default()
    }
}

fn load_or_default(path: &Path) -> ClockConfig {
    load_config(path).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        ClockConfig::default()
    })
}

// ── Message ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    /// Propagate a core event-bus message.
    App(AppMessage),
    /// Primary button pressed inside the window — hand the move to the OS.
    DragStarted(window::Id),
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Clock {
    state:       ClockState,
    config:      ClockConfig,
    config_path: PathBuf,
    theme:       Theme,
    face:        GradientClock,
    guard:       RolloverGuard,
    time:        Box<dyn TimeSource>,
}

impl Clock {
    fn new(config: ClockConfig, config_path: PathBuf) -> (Self, Task<Message>) {
        (Self::with_time_source(config, config_path, Box::new(SystemClock)), Task::none())
    }

    /// Build the clock and apply the forced initial tick, so the first frame
    /// already shows the time.
    fn with_time_source(config: ClockConfig, config_path: PathBuf, time: Box<dyn TimeSource>) -> Self {
        let theme = Theme::from_config(&config);
        let now = time.now();

        Self {
            state: ClockState::at(now, theme.pattern),
            config,
            config_path,
            theme,
            face: GradientClock::new(),
            guard: RolloverGuard::new(now),
            time,
        }
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::App(msg) => self.handle_app(msg),
            Message::DragStarted(id) => window::drag(id),
        }
    }

    fn handle_app(&mut self, msg: AppMessage) -> Task<Message> {
        match msg {
            AppMessage::Tick => return self.tick(),
            AppMessage::ConfigReloaded => self.reload(),
            AppMessage::ResetRequested => self.reset(),
        }
        Task::none()
    }

    fn tick(&mut self) -> Task<Message> {
        let now = self.time.now();

        if self.state.tick(now, self.theme.pattern) {
            self.face.invalidate();
        }

        if self.reset_due(now) {
            return Task::done(Message::App(AppMessage::ResetRequested));
        }
        Task::none()
    }

    /// Whether the configured reset policy asks for a reset at `now`.
    fn reset_due(&self, now: NaiveTime) -> bool {
        self.config.behavior.reset == ResetPolicy::EveryMinute && self.guard.observe(now, false)
    }

    fn reload(&mut self) {
        match load_config(&self.config_path) {
            Ok(cfg) => {
                info!("Config reloaded");
                if cfg.window != self.config.window {
                    info!("Window geometry changes apply on next launch");
                }
                self.apply_config(cfg);
            }
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }

    /// Rebuild everything derived from the config and the clock as if the
    /// program had just started.
    ///
    /// An unreadable config keeps the one in memory, as a reload does.
    fn reset(&mut self) {
        let cfg = match load_config(&self.config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config unreadable during reset, keeping current: {e}");
                self.config.clone()
            }
        };
        let now = self.time.now();

        self.apply_config(cfg);
        self.state = ClockState::at(now, self.theme.pattern);
        self.guard.rearm(now);
        self.face.invalidate();

        info!("Clock state reset at minute {}", self.guard.start_minute());
    }

    fn apply_config(&mut self, cfg: ClockConfig) {
        self.theme = Theme::from_config(&cfg);
        self.config = cfg;
        // A format change must show up before the next tick.
        self.state.tick(self.state.time, self.theme.pattern);
        self.face.invalidate();
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        container(self.face.view(&self.state, &self.theme))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(Duration::from_secs(1)).map(|_| Message::App(AppMessage::Tick));

        Subscription::batch([
            tick,
            event::listen_with(drag_filter),
            Subscription::run_with(self.config_path.clone(), config_stream),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: iced::Color::TRANSPARENT,
            text_color: self.theme.base.to_iced(),
        }
    }
}

// ── Subscription sources ──────────────────────────────────────────────────────

/// Left-button presses start a window drag; everything else is ignored.
fn drag_filter(event: Event, _status: event::Status, id: window::Id) -> Option<Message> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            debug!("Drag started");
            Some(Message::DragStarted(id))
        }
        _ => None,
    }
}

/// Watches the clock's config file for writes and sends `ConfigReloaded`.
///
/// Keyed on the path, so the watcher always follows the file `Clock` reloads.
#[allow(clippy::ptr_arg)] // `Subscription::run_with` passes the key by reference.
fn config_stream(path: &PathBuf) -> impl iced::futures::Stream<Item = Message> {
    let path = path.clone();
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(path);

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::App(AppMessage::ConfigReloaded));
        }

        // Watcher task exited — keep the subscription alive without it.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
