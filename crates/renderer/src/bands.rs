use crate::gradient::GradientSpec;
use fillclock_theme::Color;
use iced::{Rectangle, Size};

/// Slices per colour blend.  The blends span 1% of the text height, so a few
/// slices are visually indistinguishable from a true linear ramp.
pub const RAMP_SLICES: usize = 4;

/// Text box height as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.2;

/// A horizontal strip of the text box painted in a single colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub top:    f32,
    pub height: f32,
    pub color:  Color,
}

impl Band {
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Lay the gradient out over a box starting at `top` and `height` tall.
///
/// Zero-width intervals are skipped, blends are sliced into [`RAMP_SLICES`]
/// strips coloured at their midpoints, and touching strips of the same colour
/// are merged.
#[must_use]
pub fn bands(spec: &GradientSpec, top: f32, height: f32) -> Vec<Band> {
    let mut out: Vec<Band> = Vec::new();

    let mut push = |band: Band| {
        if let Some(last) = out.last_mut() {
            if last.color == band.color && (last.bottom() - band.top).abs() < 1e-3 {
                last.height += band.height;
                return;
            }
        }
        out.push(band);
    };

    for pair in spec.stops().windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let span = to.offset - from.offset;
        if span <= 0.0 {
            continue;
        }

        let y = top + from.offset * height;
        let h = span * height;

        if from.color == to.color {
            push(Band { top: y, height: h, color: from.color });
            continue;
        }

        let slice = h / RAMP_SLICES as f32;
        for i in 0..RAMP_SLICES {
            let t = (i as f32 + 0.5) / RAMP_SLICES as f32;
            push(Band {
                top:    y + slice * i as f32,
                height: slice,
                color:  from.color.lerp(to.color, t),
            });
        }
    }

    out
}

/// Box the text is laid out in: full widget width, one line tall, centred
/// vertically.  The gradient runs from its top edge to its bottom edge.
#[must_use]
pub fn text_box(bounds: Size, font_size: f32) -> Rectangle {
    let height = font_size * LINE_HEIGHT;
    Rectangle {
        x:      0.0,
        y:      ((bounds.height - height) / 2.0).max(0.0),
        width:  bounds.width,
        height,
    }
}
