pub mod clock;

pub use clock::GradientClock;
