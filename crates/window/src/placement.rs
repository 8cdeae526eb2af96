//! Initial window position for each screen corner.
//!
//! `window::Position::SpecificWith` takes a plain function pointer, so each
//! corner gets its own function that forwards to [`anchor_point`].

use fillclock_config::Corner;
use iced::{Point, Size};

/// Top-left origin that puts a `window`-sized window flush into `corner` of a
/// `monitor`-sized screen.  Never negative, even if the window is larger than
/// the screen.
#[must_use]
pub fn anchor_point(corner: Corner, window: Size, monitor: Size) -> Point {
    let right  = (monitor.width - window.width).max(0.0);
    let bottom = (monitor.height - window.height).max(0.0);

    match corner {
        Corner::TopLeft     => Point::new(0.0, 0.0),
        Corner::TopRight    => Point::new(right, 0.0),
        Corner::BottomLeft  => Point::new(0.0, bottom),
        Corner::BottomRight => Point::new(right, bottom),
    }
}

/// The positioning function handed to the window settings.
#[must_use]
pub fn position_fn(corner: Corner) -> fn(Size, Size) -> Point {
    match corner {
        Corner::TopLeft     => |w, m| anchor_point(Corner::TopLeft, w, m),
        Corner::TopRight    => |w, m| anchor_point(Corner::TopRight, w, m),
        Corner::BottomLeft  => |w, m| anchor_point(Corner::BottomLeft, w, m),
        Corner::BottomRight => |w, m| anchor_point(Corner::BottomRight, w, m),
    }
}
