//! Rectangle and line element definitions.

use crate::{
    color::Color,
    geometry::{Point, Rect},
};

/// Fraction of the frame width used as the corner radius when a rounded
/// rectangle does not specify one.
const DEFAULT_CORNER_FRACTION: f32 = 0.05;

/// A border drawn around a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    color: Color,
    width: f32,
}

impl Stroke {
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Returns the stroke color
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the stroke width in points
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// A filled rectangle, optionally rounded and stroked.
#[derive(Debug, Clone)]
pub struct Rectangle {
    frame: Rect,
    fill: Color,
    corner_radius: Option<f32>,
    stroke: Option<Stroke>,
}

impl Rectangle {
    /// Creates a sharp-cornered filled rectangle.
    pub fn sharp(frame: Rect, fill: Color) -> Self {
        Self {
            frame,
            fill,
            corner_radius: None,
            stroke: None,
        }
    }

    /// Creates a rounded rectangle.
    ///
    /// When `radius` is `None` the radius defaults to a fraction of the frame
    /// width. Either way the radius is clamped so it never exceeds half the
    /// shorter side of the frame.
    pub fn rounded(frame: Rect, fill: Color, radius: Option<f32>) -> Self {
        let requested = radius.unwrap_or(frame.width() * DEFAULT_CORNER_FRACTION);
        let clamped = requested.min(frame.size().min_side() / 2.0).max(0.0);

        Self {
            frame,
            fill,
            corner_radius: Some(clamped),
            stroke: None,
        }
    }

    /// Adds a border stroke (builder style).
    pub fn with_stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Returns the frame of the rectangle
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Returns the fill color
    pub fn fill(&self) -> &Color {
        &self.fill
    }

    /// Returns the corner radius, if the rectangle is rounded
    pub fn corner_radius(&self) -> Option<f32> {
        self.corner_radius
    }

    /// Returns the border stroke, if any
    pub fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }
}

/// A straight connector segment between two points.
#[derive(Debug, Clone)]
pub struct Line {
    start: Point,
    end: Point,
    color: Color,
    width: f32,
}

impl Line {
    pub fn new(start: Point, end: Point, color: Color, width: f32) -> Self {
        Self {
            start,
            end,
            color,
            width,
        }
    }

    /// Returns the start point
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the line color
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Returns the line width in points
    pub fn width(&self) -> f32 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn accent() -> Color {
        Color::new("#22d3ee").unwrap()
    }

    #[test]
    fn test_default_radius_is_fraction_of_width() {
        let rect = Rectangle::rounded(Rect::new(0.0, 0.0, 200.0, 100.0), accent(), None);

        assert_approx_eq!(f32, rect.corner_radius().unwrap(), 10.0);
    }

    #[test]
    fn test_radius_clamped_to_half_shorter_side() {
        // 100 requested against a 40pt-tall frame clamps to 20
        let rect = Rectangle::rounded(Rect::new(0.0, 0.0, 200.0, 40.0), accent(), Some(100.0));

        assert_approx_eq!(f32, rect.corner_radius().unwrap(), 20.0);
    }

    #[test]
    fn test_sharp_rectangle_has_no_radius() {
        let rect = Rectangle::sharp(Rect::new(0.0, 0.0, 10.0, 10.0), accent());

        assert_eq!(rect.corner_radius(), None);
    }
}
