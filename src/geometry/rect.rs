// MIT/Apache2 License

use super::{Pixel, PixelRect, Point, Size};
use crate::{primitives, Float};
use core::fmt;
use euclid::{point2, size2};
use num_traits::{AsPrimitive, ToPrimitive};

/// One of the four edges of a rectangle, used to pick where `Rect::divide` cuts from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RectEdge {
    MinX,
    MinY,
    MaxX,
    MaxY,
}

/// A rectangle, described by its origin and its size.
///
/// The size may be negative; every accessor reads the rectangle as if it were standardized, so
/// `Rect::from_components(10, 10, -10, -10).min_x()` is `0.0`. Two distinguished values are not regular
/// regions: [`Rect::NULL`](#associatedconstant.NULL) means "no rectangle at all" and
/// [`Rect::INFINITE`](#associatedconstant.INFINITE) covers the entire plane. Test for them with `is_null` and
/// `is_infinite`.
///
/// Equality compares the standardized forms, so two rectangles covering the same region are equal even if
/// their sizes have different signs.
///
/// # Examples
///
/// ```rust
/// # use cg_geometry::{Point, Rect};
/// let r = Rect::from_components(0, 0, -10, -10);
/// assert_eq!(r.standardized(), Rect::from_components(-10, -10, 10, 10));
/// assert!(r.contains_point(Point::new(-5, -5)));
///
/// // the null rectangle is not the zero rectangle
/// assert!(Rect::NULL.is_null());
/// assert!(!Rect::ZERO.is_null());
/// ```
#[derive(Default, Copy, Clone)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// The rectangle at the origin with a zero size.
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// The null rectangle. It is the identity of `union` and the result of an empty `intersection`.
    pub const NULL: Rect = primitives::NULL;

    /// The rectangle that contains every other rectangle.
    pub const INFINITE: Rect = primitives::INFINITE;

    /// Create a rectangle from its origin and size.
    #[inline]
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a rectangle from its four components, converting them to floats.
    #[inline]
    pub fn from_components<T: AsPrimitive<Float>>(x: T, y: T, width: T, height: T) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> Float {
        primitives::width(*self)
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> Float {
        primitives::height(*self)
    }

    #[inline]
    #[must_use]
    pub fn min_x(&self) -> Float {
        primitives::min_x(*self)
    }

    #[inline]
    #[must_use]
    pub fn mid_x(&self) -> Float {
        primitives::mid_x(*self)
    }

    #[inline]
    #[must_use]
    pub fn max_x(&self) -> Float {
        primitives::max_x(*self)
    }

    #[inline]
    #[must_use]
    pub fn min_y(&self) -> Float {
        primitives::min_y(*self)
    }

    #[inline]
    #[must_use]
    pub fn mid_y(&self) -> Float {
        primitives::mid_y(*self)
    }

    #[inline]
    #[must_use]
    pub fn max_y(&self) -> Float {
        primitives::max_y(*self)
    }

    /// Tell whether this is the null rectangle.
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        primitives::is_null(*self)
    }

    /// Tell whether this rectangle covers no area. The null rectangle is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        primitives::is_empty(*self)
    }

    /// Tell whether this is the infinite rectangle.
    #[inline]
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        primitives::is_infinite(*self)
    }

    /// Get the equivalent rectangle with a non-negative width and height.
    #[inline]
    #[must_use]
    pub fn standardized(&self) -> Rect {
        primitives::standardize(*self)
    }

    /// Get the smallest rectangle with integer edges that contains this one.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use cg_geometry::Rect;
    /// let r = Rect::from_components(0.5, 1.25, 2.0, 2.5);
    /// assert_eq!(r.integral(), Rect::from_components(0, 1, 3, 3));
    /// ```
    #[inline]
    #[must_use]
    pub fn integral(&self) -> Rect {
        primitives::integral(*self)
    }

    #[inline]
    pub fn standardize_in_place(&mut self) {
        *self = self.standardized();
    }

    #[inline]
    pub fn make_integral_in_place(&mut self) {
        *self = self.integral();
    }

    /// Shrink the rectangle by `dx` on the left and right edges and by `dy` on the top and bottom edges.
    /// Negative values grow it. If the result would have a negative size, it is the null rectangle.
    #[inline]
    #[must_use]
    pub fn inset_by(&self, dx: Float, dy: Float) -> Rect {
        primitives::inset(*self, dx, dy)
    }

    #[inline]
    pub fn inset_in_place(&mut self, dx: Float, dy: Float) {
        *self = self.inset_by(dx, dy);
    }

    /// Move the rectangle by `dx` and `dy`.
    #[inline]
    #[must_use]
    pub fn offset_by(&self, dx: Float, dy: Float) -> Rect {
        primitives::offset(*self, dx, dy)
    }

    #[inline]
    pub fn offset_in_place(&mut self, dx: Float, dy: Float) {
        *self = self.offset_by(dx, dy);
    }

    /// Get the smallest rectangle containing both rectangles.
    #[inline]
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        primitives::union(*self, *other)
    }

    #[inline]
    pub fn form_union(&mut self, other: &Rect) {
        *self = self.union(other);
    }

    /// Get the area shared by both rectangles, or the null rectangle if they do not overlap.
    #[inline]
    #[must_use]
    pub fn intersection(&self, other: &Rect) -> Rect {
        primitives::intersection(*self, *other)
    }

    #[inline]
    pub fn form_intersection(&mut self, other: &Rect) {
        *self = self.intersection(other);
    }

    /// Split the rectangle in two. The slice is the part within `at_distance` of `from_edge`; the remainder is
    /// what is left over. The distance is clamped to the extent of the rectangle along that axis.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use cg_geometry::{Rect, RectEdge};
    /// let r = Rect::from_components(0, 0, 10, 4);
    /// let (slice, remainder) = r.divide(3.0, RectEdge::MaxX);
    /// assert_eq!(slice, Rect::from_components(7, 0, 3, 4));
    /// assert_eq!(remainder, Rect::from_components(0, 0, 7, 4));
    /// ```
    #[inline]
    #[must_use]
    pub fn divide(&self, at_distance: Float, from_edge: RectEdge) -> (Rect, Rect) {
        primitives::divide(*self, at_distance, from_edge)
    }

    /// Tell whether `other` lies entirely within this rectangle.
    #[inline]
    #[must_use]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        primitives::contains_rect(*self, *other)
    }

    /// Tell whether the point lies within this rectangle. The minimum edges are inside, the maximum edges are
    /// not.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        primitives::contains_point(*self, point)
    }

    /// Tell whether the rectangles share some area.
    #[inline]
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        primitives::intersects(*self, *other)
    }

    /// Convert this rectangle into whole pixels, for use with a drawing surface.
    ///
    /// # Errors
    ///
    /// Returns `Error::NullRect` or `Error::InfiniteRect` for the sentinel rectangles, `Error::NotIntegral` if
    /// any edge is not on an integer coordinate (see `integral`), and `Error::OutOfRange` if an edge does not
    /// fit in an `i32`.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use cg_geometry::{Error, Rect};
    /// let r = Rect::from_components(2, 3, -2, 4);
    /// let px = r.to_pixel_rect().unwrap();
    /// assert_eq!((px.origin.x, px.size.width), (0, 2));
    ///
    /// assert_eq!(Rect::NULL.to_pixel_rect(), Err(Error::NullRect));
    /// ```
    pub fn to_pixel_rect(&self) -> crate::Result<PixelRect> {
        #[inline]
        fn cvt(val: Float) -> crate::Result<i32> {
            val.to_i32().ok_or(crate::Error::OutOfRange(val))
        }

        if self.is_null() {
            return Err(crate::Error::NullRect);
        }
        if self.is_infinite() {
            return Err(crate::Error::InfiniteRect);
        }

        let std_rect = self.standardized();
        if std_rect.integral() != std_rect {
            log::debug!("Refusing to convert non-integral rectangle {:?}", self);
            return Err(crate::Error::NotIntegral(*self));
        }

        Ok(PixelRect::new(
            point2::<_, Pixel>(cvt(std_rect.origin.x)?, cvt(std_rect.origin.y)?),
            size2(cvt(std_rect.size.width)?, cvt(std_rect.size.height)?),
        ))
    }
}

/// Shorthand for `Rect::from_components`.
#[inline]
pub fn rect<T: AsPrimitive<Float>>(x: T, y: T, width: T, height: T) -> Rect {
    Rect::from_components(x, y, width, height)
}

impl PartialEq for Rect {
    #[inline]
    fn eq(&self, other: &Rect) -> bool {
        primitives::equal(*self, *other)
    }
}

impl fmt::Debug for Rect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:?}, {:?}, {:?}, {:?})",
            self.origin.x, self.origin.y, self.size.width, self.size.height
        )
    }
}

impl<U> From<euclid::Rect<Float, U>> for Rect {
    #[inline]
    fn from(r: euclid::Rect<Float, U>) -> Self {
        Self::new(r.origin.into(), r.size.into())
    }
}

impl<U> From<Rect> for euclid::Rect<Float, U> {
    #[inline]
    fn from(r: Rect) -> Self {
        euclid::Rect::new(r.origin.into(), r.size.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::format;

    #[test]
    fn accessors_read_negative_sizes_standardized() {
        let r = rect(10, 20, -4, -6);
        assert_eq!((r.min_x(), r.max_x(), r.mid_x()), (6.0, 10.0, 8.0));
        assert_eq!((r.min_y(), r.max_y(), r.mid_y()), (14.0, 20.0, 17.0));
        assert_eq!((r.width(), r.height()), (4.0, 6.0));

        // the stored fields are left alone
        assert_eq!(r.size, Size::new(-4, -6));
    }

    #[test]
    fn equality_compares_regions() {
        assert_eq!(rect(0, 0, -10, -10), rect(-10, -10, 10, 10));
        assert_ne!(Rect::ZERO, Rect::NULL);
        assert_eq!(Rect::NULL, Rect::NULL);
        assert_eq!(Rect::INFINITE, Rect::INFINITE);
    }

    #[test]
    fn in_place_forms_match_pure_forms() {
        let base = rect(1.5, 2.5, -3.0, 4.0);
        let other = rect(0, 0, 2, 2);

        let mut r = base;
        r.standardize_in_place();
        assert_eq!(r, base.standardized());

        let mut r = base;
        r.make_integral_in_place();
        assert_eq!(r, base.integral());

        let mut r = base;
        r.inset_in_place(0.5, 1.0);
        assert_eq!(r, base.inset_by(0.5, 1.0));

        let mut r = base;
        r.offset_in_place(-1.0, 1.0);
        assert_eq!(r, base.offset_by(-1.0, 1.0));

        let mut r = base;
        r.form_union(&other);
        assert_eq!(r, base.union(&other));

        let mut r = base;
        r.form_intersection(&other);
        assert_eq!(r, base.intersection(&other));
    }

    #[test]
    fn offset_moves_origin_only() {
        assert_eq!(rect(1, 2, 3, 4).offset_by(10.0, 20.0), rect(11, 22, 3, 4));

        let moved = rect(5, 5, -2, -3).offset_by(-1.0, 0.5);
        assert_eq!(moved.origin, Point::new(4.0, 5.5));
        assert_eq!(moved.size, Size::new(-2, -3));

        assert!(Rect::INFINITE.offset_by(1.0e10, -1.0e10).is_infinite());
        assert!(Rect::NULL.offset_by(1.0, 1.0).is_null());
    }

    #[test]
    fn debug_renders_stored_fields() {
        assert_eq!(format!("{:?}", rect(1, 2, -3, 4)), "(1.0, 2.0, -3.0, 4.0)");
    }

    #[test]
    fn pixel_conversion_errors() {
        assert_eq!(Rect::INFINITE.to_pixel_rect(), Err(crate::Error::InfiniteRect));

        let half = rect(0.5, 0.0, 1.0, 1.0);
        assert_eq!(half.to_pixel_rect(), Err(crate::Error::NotIntegral(half)));

        let huge = rect(1.0e12, 0.0, 1.0, 1.0);
        assert_eq!(huge.to_pixel_rect(), Err(crate::Error::OutOfRange(1.0e12)));

        let px = rect(-3, 4, 5, 6).to_pixel_rect().unwrap();
        assert_eq!(px, PixelRect::new(point2(-3, 4), size2(5, 6)));
    }

    #[test]
    fn euclid_round_trip() {
        let r = rect(1, 2, 3, 4);
        let e: euclid::Rect<Float, euclid::UnknownUnit> = r.into();
        assert_eq!(e.size.area(), 12.0);
        assert_eq!(Rect::from(e), r);
    }
}
