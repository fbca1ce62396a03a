// MIT/Apache2 License

use crate::Float;
use core::fmt;
use euclid::Vector2D;
use num_traits::AsPrimitive;

/// A displacement in two dimensions.
#[derive(Default, Copy, Clone, PartialEq)]
pub struct Vector {
    pub dx: Float,
    pub dy: Float,
}

impl Vector {
    /// The vector that moves nothing.
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    #[inline]
    pub fn new<T: AsPrimitive<Float>>(dx: T, dy: T) -> Self {
        Self {
            dx: dx.as_(),
            dy: dy.as_(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }
}

/// Shorthand for `Vector::new`.
#[inline]
pub fn vector<T: AsPrimitive<Float>>(dx: T, dy: T) -> Vector {
    Vector::new(dx, dy)
}

impl fmt::Debug for Vector {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.dx, self.dy)
    }
}

impl<T: AsPrimitive<Float>> From<(T, T)> for Vector {
    #[inline]
    fn from((dx, dy): (T, T)) -> Self {
        Self::new(dx, dy)
    }
}

impl<U> From<Vector2D<Float, U>> for Vector {
    #[inline]
    fn from(v: Vector2D<Float, U>) -> Self {
        Self { dx: v.x, dy: v.y }
    }
}

impl<U> From<Vector> for Vector2D<Float, U> {
    #[inline]
    fn from(v: Vector) -> Self {
        Vector2D::new(v.dx, v.dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn constructors_agree() {
        assert_eq!(Vector::new(-1, 2), vector(-1.0, 2.0));
        assert_eq!(Vector::from((0u32, 0u32)), Vector::ZERO);
        assert_eq!(format!("{:?}", Vector::new(-1, 2)), "(-1.0, 2.0)");
    }
}
