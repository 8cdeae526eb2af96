//! Paint-time geometry for the clock face.
//!
//! - [`gradient`] turns a fill level into gradient stops.
//! - [`bands`] turns stops into clip rectangles the canvas can fill, and
//!   places the text box inside the widget.
//!
//! Nothing here touches a renderer; the widget crate does the drawing.

pub mod bands;
pub mod gradient;

pub use bands::{bands, text_box, Band, LINE_HEIGHT, RAMP_SLICES};
pub use gradient::{compute_stops, GradientSpec, GradientStop};
