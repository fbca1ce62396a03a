// MIT/Apache2 License

//! Affine transforms over the geometry types.

use crate::{primitives, Float, Point, Rect, Size};
use euclid::default::{Box2D, Transform2D};
use euclid::{point2, vec2};

/// A 2D affine transform.
///
/// A point `(x, y)` is mapped to `(a * x + c * y + tx, b * x + d * y + ty)`.
///
/// # Examples
///
/// ```rust
/// # use cg_geometry::{AffineTransform, Point, Rect};
/// let t = AffineTransform::scale(2.0, 3.0);
/// assert_eq!(t.apply_to_point(Point::new(1, 1)), Point::new(2, 3));
///
/// let moved = AffineTransform::translation(5.0, 0.0).apply_to_rect(&Rect::from_components(0, 0, 1, 1));
/// assert_eq!(moved, Rect::from_components(5, 0, 1, 1));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AffineTransform {
    pub a: Float,
    pub b: Float,
    pub c: Float,
    pub d: Float,
    pub tx: Float,
    pub ty: Float,
}

impl Default for AffineTransform {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    /// The transform that leaves everything where it is.
    pub const IDENTITY: AffineTransform = AffineTransform::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[inline]
    #[must_use]
    pub const fn new(a: Float, b: Float, c: Float, d: Float, tx: Float, ty: Float) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    #[inline]
    #[must_use]
    pub const fn translation(tx: Float, ty: Float) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    #[must_use]
    pub const fn scale(sx: Float, sy: Float) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    #[inline]
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    #[inline]
    fn to_euclid(self) -> Transform2D<Float> {
        Transform2D::new(self.a, self.b, self.c, self.d, self.tx, self.ty)
    }

    #[inline]
    #[must_use]
    pub fn apply_to_point(&self, p: Point) -> Point {
        self.to_euclid().transform_point(point2(p.x, p.y)).into()
    }

    /// Apply the linear part of the transform to a size. Translation does not affect sizes.
    #[inline]
    #[must_use]
    pub fn apply_to_size(&self, s: Size) -> Size {
        let v = self.to_euclid().transform_vector(vec2(s.width, s.height));
        Size {
            width: v.x,
            height: v.y,
        }
    }

    /// Get the bounding box of the transformed corners of the rectangle. The null and infinite rectangles are
    /// returned unchanged.
    #[must_use]
    pub fn apply_to_rect(&self, r: &Rect) -> Rect {
        if r.is_null() || r.is_infinite() {
            return *r;
        }

        let r = r.standardized();
        let (x0, y0) = (r.min_x(), r.min_y());
        let (x1, y1) = (r.max_x(), r.max_y());
        let t = self.to_euclid();
        let corners = [
            t.transform_point(point2(x0, y0)),
            t.transform_point(point2(x1, y0)),
            t.transform_point(point2(x1, y1)),
            t.transform_point(point2(x0, y1)),
        ];

        let bounds = Box2D::from_points(corners);
        primitives::standardize(Rect::new(
            bounds.min.into(),
            Size {
                width: bounds.max.x - bounds.min.x,
                height: bounds.max.y - bounds.min.y,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rect;

    #[test]
    fn identity_is_default() {
        assert!(AffineTransform::default().is_identity());
        assert!(!AffineTransform::translation(1.0, 0.0).is_identity());
        let p = Point::new(3.5, -2.0);
        assert_eq!(AffineTransform::IDENTITY.apply_to_point(p), p);
    }

    #[test]
    fn size_ignores_translation() {
        let t = AffineTransform::new(2.0, 0.0, 0.0, 2.0, 100.0, 100.0);
        assert_eq!(t.apply_to_size(Size::new(3, 4)), Size::new(6, 8));
    }

    #[test]
    fn rotation_bounds() {
        // quarter turn counterclockwise
        let t = AffineTransform::new(0.0, 1.0, -1.0, 0.0, 0.0, 0.0);
        assert_eq!(t.apply_to_point(Point::new(1, 0)), Point::new(0, 1));
        assert_eq!(t.apply_to_rect(&rect(0, 0, 2, 1)), rect(-1, 0, 1, 2));
    }

    #[test]
    fn sentinels_pass_through() {
        let t = AffineTransform::scale(2.0, 2.0);
        assert!(t.apply_to_rect(&Rect::NULL).is_null());
        assert!(t.apply_to_rect(&Rect::INFINITE).is_infinite());
    }
}
