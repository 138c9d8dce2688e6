//! Geometric primitives for slide layout.
//!
//! All coordinates are expressed in typographic points (1 inch = 72 points),
//! measured from the top-left corner of a canvas. A canvas never mixes unit
//! systems; content authored in inches goes through [`inches`] or
//! [`Rect::from_inches`] at the boundary.

/// Number of typographic points per inch.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Converts a length in inches to typographic points.
pub const fn inches(value: f32) -> f32 {
    value * POINTS_PER_INCH
}

/// A position on a canvas, in points from the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Returns a new point translated by the given offsets
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns true if both dimensions are strictly positive
    pub fn is_positive(self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Returns the smaller of the two dimensions
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }
}

/// An axis-aligned rectangle: top-left origin plus size.
///
/// Every frame handed to a drawing operation or widget is a `Rect`. Widgets
/// position their internal elements at fixed offsets relative to the frame
/// they are given.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a rectangle from top-left coordinates and dimensions, in points.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Creates a rectangle from top-left coordinates and dimensions, in inches.
    pub fn from_inches(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(inches(x), inches(y), inches(width), inches(height))
    }

    /// Returns the top-left corner
    pub fn origin(self) -> Point {
        self.origin
    }

    /// Returns the dimensions
    pub fn size(self) -> Size {
        self.size
    }

    /// Returns the x-coordinate of the left edge
    pub fn x(self) -> f32 {
        self.origin.x()
    }

    /// Returns the y-coordinate of the top edge
    pub fn y(self) -> f32 {
        self.origin.y()
    }

    /// Returns the width of the rectangle
    pub fn width(self) -> f32 {
        self.size.width()
    }

    /// Returns the height of the rectangle
    pub fn height(self) -> f32 {
        self.size.height()
    }

    /// Returns the x-coordinate of the right edge
    pub fn right(self) -> f32 {
        self.origin.x() + self.size.width()
    }

    /// Returns the y-coordinate of the bottom edge
    pub fn bottom(self) -> f32 {
        self.origin.y() + self.size.height()
    }

    /// Returns the x-coordinate of the horizontal center
    pub fn center_x(self) -> f32 {
        self.origin.x() + self.size.width() / 2.0
    }

    /// Returns the y-coordinate of the vertical center
    pub fn center_y(self) -> f32 {
        self.origin.y() + self.size.height() / 2.0
    }

    /// Returns true if both dimensions are strictly positive
    pub fn is_positive(self) -> bool {
        self.size.is_positive()
    }

    /// Returns a new rectangle translated by the given offsets
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            origin: self.origin.translate(dx, dy),
            size: self.size,
        }
    }

    /// Returns a new rectangle shrunk inward by the given insets
    ///
    /// Shrinking past zero produces a non-positive rectangle; callers that
    /// care must check [`Rect::is_positive`] afterwards.
    pub fn inset(self, insets: Insets) -> Self {
        Self::new(
            self.x() + insets.left(),
            self.y() + insets.top(),
            self.width() - insets.horizontal_sum(),
            self.height() - insets.vertical_sum(),
        )
    }
}

/// Padding values for each side of a rectangle
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates insets with the same value on all four sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the top inset
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the right inset
    pub fn right(self) -> f32 {
        self.right
    }

    /// Returns the bottom inset
    pub fn bottom(self) -> f32 {
        self.bottom
    }

    /// Returns the left inset
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of the left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of the top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_inches_conversion() {
        assert_approx_eq!(f32, inches(1.0), 72.0);
        assert_approx_eq!(f32, inches(13.333), 959.976);
    }

    #[test]
    fn test_rect_from_inches() {
        let rect = Rect::from_inches(0.5, 1.0, 2.0, 0.25);

        assert_approx_eq!(f32, rect.x(), 36.0);
        assert_approx_eq!(f32, rect.y(), 72.0);
        assert_approx_eq!(f32, rect.width(), 144.0);
        assert_approx_eq!(f32, rect.height(), 18.0);
    }

    #[test]
    fn test_rect_edges_and_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);

        assert_approx_eq!(f32, rect.right(), 110.0);
        assert_approx_eq!(f32, rect.bottom(), 70.0);
        assert_approx_eq!(f32, rect.center_x(), 60.0);
        assert_approx_eq!(f32, rect.center_y(), 45.0);
    }

    #[test]
    fn test_rect_inset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0).inset(Insets::uniform(10.0));

        assert_approx_eq!(f32, rect.x(), 10.0);
        assert_approx_eq!(f32, rect.y(), 10.0);
        assert_approx_eq!(f32, rect.width(), 80.0);
        assert_approx_eq!(f32, rect.height(), 30.0);
    }

    #[test]
    fn test_rect_positivity() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_positive());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_positive());
        assert!(!Rect::new(0.0, 0.0, 1.0, -2.0).is_positive());

        // Over-insetting flips the rectangle to non-positive
        let collapsed = Rect::new(0.0, 0.0, 10.0, 10.0).inset(Insets::uniform(6.0));
        assert!(!collapsed.is_positive());
    }
}

#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            0.1f32..1000.0,
            0.1f32..1000.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        /// Translation preserves size and moves the origin by exactly the offset.
        #[test]
        fn translate_preserves_size(rect in rect_strategy(), dx in -500.0f32..500.0, dy in -500.0f32..500.0) {
            let moved = rect.translate(dx, dy);

            prop_assert!(approx_eq!(f32, moved.width(), rect.width()));
            prop_assert!(approx_eq!(f32, moved.height(), rect.height()));
            prop_assert!(approx_eq!(f32, moved.x(), rect.x() + dx, epsilon = 0.01));
            prop_assert!(approx_eq!(f32, moved.y(), rect.y() + dy, epsilon = 0.01));
        }

        /// Uniform insets shrink each dimension by twice the inset value.
        #[test]
        fn uniform_inset_shrinks_both_dimensions(rect in rect_strategy(), pad in 0.0f32..100.0) {
            let shrunk = rect.inset(Insets::uniform(pad));

            prop_assert!(approx_eq!(f32, shrunk.width(), rect.width() - 2.0 * pad, epsilon = 0.01));
            prop_assert!(approx_eq!(f32, shrunk.height(), rect.height() - 2.0 * pad, epsilon = 0.01));
        }
    }
}
