// MIT/Apache2 License

use crate::Float;
use core::fmt;
use euclid::Point2D;
use num_traits::AsPrimitive;

/// A location in a two-dimensional coordinate system.
///
/// # Examples
///
/// ```rust
/// # use cg_geometry::Point;
/// // integers and floats both convert to the float fields
/// let p = Point::new(3, 4);
/// assert_eq!(p, Point::new(3.0, 4.0));
/// assert_eq!(format!("{:?}", p), "(3.0, 4.0)");
/// ```
#[derive(Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Point {
    /// The point at the origin.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a new point from any pair of numbers.
    #[inline]
    pub fn new<T: AsPrimitive<Float>>(x: T, y: T) -> Self {
        Self {
            x: x.as_(),
            y: y.as_(),
        }
    }

    /// Get the point at the origin.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

/// Shorthand for `Point::new`.
#[inline]
pub fn point<T: AsPrimitive<Float>>(x: T, y: T) -> Point {
    Point::new(x, y)
}

impl fmt::Debug for Point {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

impl<T: AsPrimitive<Float>> From<(T, T)> for Point {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<U> From<Point2D<Float, U>> for Point {
    #[inline]
    fn from(p: Point2D<Float, U>) -> Self {
        Self { x: p.x, y: p.y }
    }
}

impl<U> From<Point> for Point2D<Float, U> {
    #[inline]
    fn from(p: Point) -> Self {
        Point2D::new(p.x, p.y)
    }
}
