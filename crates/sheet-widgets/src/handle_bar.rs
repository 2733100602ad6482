//! Handle bar: the grip strip at the top of the sheet.
//!
//! A fixed-height canvas drawing a background fill through the rounded-top
//! outline, with a small centered capsule signaling that the sheet is
//! draggable. Purely presentational; drag gestures are recognized by the
//! `mouse_area` the sheet view wraps around it.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

use crate::outline;

/// Height of the handle bar strip.
pub const HANDLE_BAR_HEIGHT: f32 = 44.0;

/// Size of the capsule grip indicator.
const GRIP_SIZE: Size = Size::new(30.0, 7.0);

/// Distance from the top of the strip to the grip.
const GRIP_TOP_OFFSET: f32 = 12.0;

const DEFAULT_BACKGROUND_START: Color = Color::from_rgb(1.0, 0.23, 0.19); // red
const DEFAULT_BACKGROUND_END: Color = Color::from_rgb(1.0, 0.58, 0.0); // orange

/// Visuals for the handle bar.
///
/// The background is a linear gradient spanning the strip diagonally from
/// the top-left; use the same color twice for a solid fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleBarStyle {
    pub background_start: Color,
    pub background_end: Color,
    /// Capsule grip color.
    pub grip: Color,
}

impl Default for HandleBarStyle {
    fn default() -> Self {
        Self {
            background_start: DEFAULT_BACKGROUND_START,
            background_end: DEFAULT_BACKGROUND_END,
            grip: Color::WHITE,
        }
    }
}

impl HandleBarStyle {
    /// Solid background fill.
    pub fn solid(background: Color) -> Self {
        Self {
            background_start: background,
            background_end: background,
            ..Self::default()
        }
    }

    fn background(&self, size: Size) -> canvas::Fill {
        let gradient = canvas::gradient::Linear::new(
            Point::ORIGIN,
            Point::new(size.width, size.height),
        )
        .add_stop(0.0, self.background_start)
        .add_stop(1.0, self.background_end);

        canvas::Fill::from(canvas::Gradient::Linear(gradient))
    }
}

/// Top-left corner of the capsule grip for a strip of the given width.
fn grip_top_left(width: f32) -> Point {
    Point::new((width - GRIP_SIZE.width) / 2.0, GRIP_TOP_OFFSET)
}

/// Create a handle bar element.
pub fn handle_bar<'a, Message: 'a>(style: HandleBarStyle) -> Element<'a, Message> {
    Canvas::new(HandleBar { style })
        .width(Length::Fill)
        .height(Length::Fixed(HANDLE_BAR_HEIGHT))
        .into()
}

/// Canvas program rendering the handle bar. Draw-only; no events.
#[derive(Debug, Clone, Copy)]
struct HandleBar {
    style: HandleBarStyle,
}

impl<Message> canvas::Program<Message> for HandleBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        // Background filled through the rounded-top silhouette; filling the
        // outline directly is equivalent to clipping a full-strip fill.
        let silhouette = outline::rounded_top(frame.size(), None);
        frame.fill(&silhouette, self.style.background(frame.size()));

        let grip = Path::rounded_rectangle(
            grip_top_left(frame.width()),
            GRIP_SIZE,
            (GRIP_SIZE.height / 2.0).into(),
        );
        frame.fill(&grip, self.style.grip);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grip_is_centered_below_the_top_edge() {
        let top_left = grip_top_left(390.0);
        assert_eq!(top_left, Point::new(180.0, 12.0));
    }

    #[test]
    fn grip_fits_inside_the_strip() {
        assert!(GRIP_TOP_OFFSET + GRIP_SIZE.height < HANDLE_BAR_HEIGHT);
    }

    #[test]
    fn solid_style_uses_one_color() {
        let style = HandleBarStyle::solid(Color::BLACK);
        assert_eq!(style.background_start, style.background_end);
        assert_eq!(style.grip, Color::WHITE);
    }
}
