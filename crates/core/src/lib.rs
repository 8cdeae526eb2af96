pub mod error;
pub mod event;
pub mod fill;
pub mod rollover;
pub mod state;
pub mod time_source;

pub use error::{ClockError, Result};
pub use event::Message;
pub use fill::{fill_level, transition_for, Transition, FULL_LEVEL};
pub use rollover::RolloverGuard;
pub use state::ClockState;
pub use time_source::{FixedClock, SystemClock, TimeSource};
