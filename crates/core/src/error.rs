use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("config error: {0}")]
    Config(String),

    #[error("window error: {0}")]
    Window(String),
}

pub type Result<T, E = ClockError> = std::result::Result<T, E>;
