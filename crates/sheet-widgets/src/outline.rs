//! Rounded-top outline geometry.
//!
//! The silhouette used to clip the sheet's handle bar: a flat bottom edge,
//! quarter-circle arcs at the top-left and top-right corners, and a flat top
//! edge between them. The contour is built as plain segments first so it can
//! be inspected and tested without a renderer, then lowered to an iced
//! [`Path`] for drawing.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use iced::widget::canvas::{path, Path};
use iced::{Point, Radians, Size};

/// One piece of a contour.
///
/// Arc angles follow the canvas convention: measured from the positive x
/// axis, increasing clockwise in the y-down coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f32,
        start_angle: Radians,
        end_angle: Radians,
    },
}

impl Segment {
    /// The point a segment ends on.
    pub fn end_point(&self) -> Point {
        match *self {
            Segment::MoveTo(point) | Segment::LineTo(point) => point,
            Segment::Arc {
                center,
                radius,
                end_angle,
                ..
            } => point_on_circle(center, radius, end_angle),
        }
    }

    /// The point an arc starts on. Line segments start wherever the previous
    /// segment ended.
    pub fn start_point(&self) -> Option<Point> {
        match *self {
            Segment::Arc {
                center,
                radius,
                start_angle,
                ..
            } => Some(point_on_circle(center, radius, start_angle)),
            _ => None,
        }
    }
}

fn point_on_circle(center: Point, radius: f32, angle: Radians) -> Point {
    Point::new(
        center.x + radius * angle.0.cos(),
        center.y + radius * angle.0.sin(),
    )
}

/// Build the rounded-top contour for a rect of the given size.
///
/// `radius` defaults to half the height. The contour is closed: it starts
/// and ends at the bottom-left corner. Radii beyond half the shorter
/// dimension produce self-intersecting geometry; that renders oddly but is
/// not an error.
pub fn segments(size: Size, radius: Option<f32>) -> Vec<Segment> {
    let radius = radius.unwrap_or(size.height / 2.0);

    vec![
        Segment::MoveTo(Point::new(0.0, size.height)),
        // Top-left corner: from the left edge up to the top edge.
        Segment::Arc {
            center: Point::new(radius, radius),
            radius,
            start_angle: Radians(PI),
            end_angle: Radians(3.0 * FRAC_PI_2),
        },
        Segment::LineTo(Point::new(size.width - radius, 0.0)),
        // Top-right corner: from the top edge down to the right edge.
        Segment::Arc {
            center: Point::new(size.width - radius, radius),
            radius,
            start_angle: Radians(3.0 * FRAC_PI_2),
            end_angle: Radians(TAU),
        },
        Segment::LineTo(Point::new(size.width, size.height)),
        Segment::LineTo(Point::new(0.0, size.height)),
    ]
}

/// Lower the contour to a drawable path.
pub fn rounded_top(size: Size, radius: Option<f32>) -> Path {
    let contour = segments(size, radius);

    Path::new(|builder| {
        for segment in &contour {
            match *segment {
                Segment::MoveTo(point) => builder.move_to(point),
                Segment::LineTo(point) => builder.line_to(point),
                Segment::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                } => builder.arc(path::Arc {
                    center,
                    radius,
                    start_angle,
                    end_angle,
                }),
            }
        }
        builder.close();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_point(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < 1e-4 && (actual.y - expected.y).abs() < 1e-4,
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn default_radius_contour() {
        // 100x50 rect, default radius 25: start at the bottom-left, arc to
        // (25, 0), run flat to (75, 0), arc down to the right edge, close
        // along the bottom.
        let contour = segments(Size::new(100.0, 50.0), None);
        assert_eq!(contour.len(), 6);

        assert_eq!(contour[0], Segment::MoveTo(Point::new(0.0, 50.0)));

        assert_point(contour[1].start_point().unwrap(), Point::new(0.0, 25.0));
        assert_point(contour[1].end_point(), Point::new(25.0, 0.0));

        assert_eq!(contour[2], Segment::LineTo(Point::new(75.0, 0.0)));

        assert_point(contour[3].start_point().unwrap(), Point::new(75.0, 0.0));
        assert_point(contour[3].end_point(), Point::new(100.0, 25.0));

        assert_eq!(contour[4], Segment::LineTo(Point::new(100.0, 50.0)));
        assert_eq!(contour[5], Segment::LineTo(Point::new(0.0, 50.0)));
    }

    #[test]
    fn explicit_radius_moves_the_top_edge() {
        let contour = segments(Size::new(200.0, 44.0), Some(10.0));

        assert_point(contour[1].end_point(), Point::new(10.0, 0.0));
        assert_eq!(contour[2], Segment::LineTo(Point::new(190.0, 0.0)));
        assert_point(contour[3].end_point(), Point::new(200.0, 10.0));
    }

    #[test]
    fn zero_radius_degenerates_to_a_rectangle() {
        let contour = segments(Size::new(80.0, 20.0), Some(0.0));

        // Arcs collapse to the corners.
        assert_point(contour[1].start_point().unwrap(), Point::new(0.0, 0.0));
        assert_point(contour[1].end_point(), Point::new(0.0, 0.0));
        assert_eq!(contour[2], Segment::LineTo(Point::new(80.0, 0.0)));
        assert_point(contour[3].end_point(), Point::new(80.0, 0.0));
    }

    #[test]
    fn contour_is_closed() {
        let contour = segments(Size::new(120.0, 44.0), None);
        let first = contour.first().unwrap().end_point();
        let last = contour.last().unwrap().end_point();
        assert_point(last, first);
    }
}
