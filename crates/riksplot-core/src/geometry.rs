//! Geometric primitives for chart layout.
//!
//! This module provides the types used to position chart elements and to
//! derive the document viewport:
//!
//! - [`Point`] - a 2D coordinate in chart space
//! - [`Size`] - width and height dimensions
//! - [`Bounds`] - a rectangular bounding box defined by minimum and maximum
//!   coordinates
//!
//! # Coordinate System
//!
//! The coordinate system matches SVG: origin at the top-left corner,
//! X increasing rightward, Y increasing downward. Coordinates use `f64`,
//! matching the precision of the layout arithmetic.

/// A 2D point representing a position in chart coordinate space.
///
/// # Examples
///
/// ```
/// # use riksplot_core::geometry::Point;
/// let origin = Point::new(20.0, 20.0);
/// let moved = origin.add_point(Point::new(20.0, 0.0));
/// assert_eq!(moved.x(), 40.0);
/// assert_eq!(moved.y(), 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f64 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f64 {
        self.height
    }
}

/// A rectangular bounding box defined by minimum and maximum coordinates.
///
/// Used to accumulate the extent of laid-out chart content, from which the
/// document viewport is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f64 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f64 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f64 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f64 {
        self.max_y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// The resulting bounds will have the minimum values of both bounds for
    /// min_x and min_y, and the maximum values of both bounds for max_x and
    /// max_y.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}
