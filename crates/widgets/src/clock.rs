use fillclock_core::ClockState;
use fillclock_renderer::{bands, compute_stops, text_box, LINE_HEIGHT};
use fillclock_theme::{Color, Theme};
use iced::{
    alignment,
    mouse,
    widget::canvas::{self, Cache, Canvas, Frame, Geometry, Text},
    widget::text::LineHeight,
    Element, Length, Pixels, Point, Rectangle, Renderer, Vector,
};

/// The time painted with a stepped vertical gradient.
///
/// Geometry is cached between frames; call [`GradientClock::invalidate`] when
/// the state or theme changes.
#[derive(Default)]
pub struct GradientClock {
    cache: Cache,
}

impl std::fmt::Debug for GradientClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientClock").finish_non_exhaustive()
    }
}

impl GradientClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached geometry so the next frame repaints.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    pub fn view<'a, Message: 'a>(&'a self, state: &'a ClockState, theme: &'a Theme) -> Element<'a, Message> {
        Canvas::new(ClockFace { state, theme, cache: &self.cache })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

struct ClockFace<'a> {
    state: &'a ClockState,
    theme: &'a Theme,
    cache: &'a Cache,
}

impl<Message> canvas::Program<Message> for ClockFace<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let face = self.cache.draw(renderer, bounds.size(), |frame| self.paint(frame));
        vec![face]
    }
}

impl ClockFace<'_> {
    fn paint(&self, frame: &mut Frame) {
        if self.state.text.is_empty() {
            return;
        }

        let theme = self.theme;
        let area = text_box(frame.size(), theme.font_size);
        let anchor = Point::new(area.center_x(), area.y);

        if let Some(outline) = theme.outline {
            for offset in outline_offsets(outline.width) {
                frame.fill_text(self.glyphs(anchor + offset, outline.color));
            }
        }

        let transition = theme.transition_color(self.state.transition);
        let spec = compute_stops(self.state.level, theme.base, transition);

        for band in bands(&spec, area.y, area.height) {
            let clip = Rectangle {
                x:      0.0,
                y:      band.top,
                width:  area.width,
                height: band.height,
            };
            // Drawing inside the clip is relative to the clip's origin.
            let local = Point::new(anchor.x, anchor.y - band.top);
            frame.with_clip(clip, |f| f.fill_text(self.glyphs(local, band.color)));
        }
    }

    fn glyphs(&self, position: Point, color: Color) -> Text {
        Text {
            content: self.state.text.clone(),
            position,
            color: color.to_iced(),
            size: Pixels(self.theme.font_size),
            line_height: LineHeight::Relative(LINE_HEIGHT),
            font: self.theme.font,
            align_x: alignment::Horizontal::Center.into(),
            align_y: alignment::Vertical::Top,
            ..Text::default()
        }
    }
}

/// Eight copies around the glyphs approximate a stroke of `width` pixels.
fn outline_offsets(width: f32) -> [Vector; 8] {
    let d = width * std::f32::consts::FRAC_1_SQRT_2;
    [
        Vector::new(-width, 0.0),
        Vector::new(width, 0.0),
        Vector::new(0.0, -width),
        Vector::new(0.0, width),
        Vector::new(-d, -d),
        Vector::new(d, -d),
        Vector::new(-d, d),
        Vector::new(d, d),
    ]
}
