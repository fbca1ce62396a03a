// MIT/Apache2 License

use crate::Float;
use core::fmt;
use euclid::Size2D;
use num_traits::AsPrimitive;

/// The dimensions of a rectangle.
///
/// Negative dimensions are allowed. Rectangles with a negative size are read as if they were standardized;
/// see [`Rect::standardized`](struct.Rect.html#method.standardized).
#[derive(Default, Copy, Clone, PartialEq)]
pub struct Size {
    pub width: Float,
    pub height: Float,
}

impl Size {
    /// A size with no width and no height.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size from any pair of numbers.
    #[inline]
    pub fn new<T: AsPrimitive<Float>>(width: T, height: T) -> Self {
        Self {
            width: width.as_(),
            height: height.as_(),
        }
    }

    /// Get the empty size.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

/// Shorthand for `Size::new`.
#[inline]
pub fn size<T: AsPrimitive<Float>>(width: T, height: T) -> Size {
    Size::new(width, height)
}

impl fmt::Debug for Size {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.width, self.height)
    }
}

impl<T: AsPrimitive<Float>> From<(T, T)> for Size {
    #[inline]
    fn from((width, height): (T, T)) -> Self {
        Self::new(width, height)
    }
}

impl<U> From<Size2D<Float, U>> for Size {
    #[inline]
    fn from(s: Size2D<Float, U>) -> Self {
        Self {
            width: s.width,
            height: s.height,
        }
    }
}

impl<U> From<Size> for Size2D<Float, U> {
    #[inline]
    fn from(s: Size) -> Self {
        Size2D::new(s.width, s.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn zero_is_not_a_negative_size() {
        let negative = Size::new(-3, -4);
        assert_ne!(Size::ZERO, negative);
        assert_eq!(Size::ZERO, Size::new(0, 0));
        assert_eq!((negative.width, negative.height), (-3.0, -4.0));
    }

    #[test]
    fn debug_renders_pair() {
        assert_eq!(format!("{:?}", size(2.5f32, 10.0f32)), "(2.5, 10.0)");
        assert_eq!(format!("{:?}", Size::zero()), "(0.0, 0.0)");
    }
}
