// MIT/Apache2 License

//! The native geometry primitives.
//!
//! Every computation the value types expose lives here, as free functions over `Rect`. The functions follow
//! the conventions of the platform graphics libraries:
//!
//! * A rectangle with a negative width or height is read as its standardized form, which covers the same
//!   region with a non-negative size.
//! * [`NULL`](constant.NULL.html) has an origin at positive infinity and means "no rectangle". It is the
//!   identity for `union` and absorbs `intersection`.
//! * [`INFINITE`](constant.INFINITE.html) covers the whole plane. It absorbs `union` and is the identity for
//!   `intersection`.
//! * Containment is half-open: a rectangle includes its minimum edges but not its maximum edges.
//!
//! The actual interval arithmetic is done on `euclid` boxes.

use crate::{Float, Point, Rect, RectEdge, Size};
use euclid::{default::Box2D, point2};

/// The null rectangle.
pub const NULL: Rect = Rect::new(
    Point {
        x: Float::INFINITY,
        y: Float::INFINITY,
    },
    Size::ZERO,
);

/// The infinite rectangle. It is centered on the origin and as large as a float allows.
pub const INFINITE: Rect = Rect::new(
    Point {
        x: -Float::MAX / 2.0,
        y: -Float::MAX / 2.0,
    },
    Size {
        width: Float::MAX,
        height: Float::MAX,
    },
);

// the box spanned by a rectangle, min and max corners sorted
#[inline]
fn to_box(r: Rect) -> Box2D<Float> {
    let r = standardize(r);
    Box2D::new(
        point2(r.origin.x, r.origin.y),
        point2(r.origin.x + r.size.width, r.origin.y + r.size.height),
    )
}

#[inline]
fn from_box(b: Box2D<Float>) -> Rect {
    Rect::new(
        Point { x: b.min.x, y: b.min.y },
        Size {
            width: b.max.x - b.min.x,
            height: b.max.y - b.min.y,
        },
    )
}

#[inline]
#[must_use]
pub fn is_null(r: Rect) -> bool {
    r.origin.x == Float::INFINITY || r.origin.y == Float::INFINITY
}

#[inline]
#[must_use]
pub fn is_infinite(r: Rect) -> bool {
    r.origin.x == INFINITE.origin.x
        && r.origin.y == INFINITE.origin.y
        && r.size.width == INFINITE.size.width
        && r.size.height == INFINITE.size.height
}

/// The null rectangle and rectangles with a zero width or height are empty.
#[inline]
#[must_use]
pub fn is_empty(r: Rect) -> bool {
    is_null(r) || r.size.width == 0.0 || r.size.height == 0.0
}

/// Flip negative dimensions, moving the origin so the covered region stays the same.
#[inline]
#[must_use]
pub fn standardize(r: Rect) -> Rect {
    if is_null(r) {
        return r;
    }

    let mut out = r;
    if out.size.width < 0.0 {
        out.origin.x += out.size.width;
        out.size.width = -out.size.width;
    }
    if out.size.height < 0.0 {
        out.origin.y += out.size.height;
        out.size.height = -out.size.height;
    }
    out
}

#[inline]
#[must_use]
pub fn min_x(r: Rect) -> Float {
    standardize(r).origin.x
}

#[inline]
#[must_use]
pub fn mid_x(r: Rect) -> Float {
    let r = standardize(r);
    r.origin.x + r.size.width / 2.0
}

#[inline]
#[must_use]
pub fn max_x(r: Rect) -> Float {
    let r = standardize(r);
    r.origin.x + r.size.width
}

#[inline]
#[must_use]
pub fn min_y(r: Rect) -> Float {
    standardize(r).origin.y
}

#[inline]
#[must_use]
pub fn mid_y(r: Rect) -> Float {
    let r = standardize(r);
    r.origin.y + r.size.height / 2.0
}

#[inline]
#[must_use]
pub fn max_y(r: Rect) -> Float {
    let r = standardize(r);
    r.origin.y + r.size.height
}

#[inline]
#[must_use]
pub fn width(r: Rect) -> Float {
    standardize(r).size.width
}

#[inline]
#[must_use]
pub fn height(r: Rect) -> Float {
    standardize(r).size.height
}

/// The smallest rectangle with integer edges containing `r`.
#[inline]
#[must_use]
pub fn integral(r: Rect) -> Rect {
    if is_null(r) || is_infinite(r) {
        return r;
    }
    from_box(to_box(r).round_out())
}

/// Move every edge inward by `dx` horizontally and `dy` vertically. Collapses to `NULL` if either dimension
/// would become negative.
#[inline]
#[must_use]
pub fn inset(r: Rect, dx: Float, dy: Float) -> Rect {
    if is_null(r) || is_infinite(r) {
        return r;
    }

    let r = standardize(r);
    let out = Rect::new(
        Point {
            x: r.origin.x + dx,
            y: r.origin.y + dy,
        },
        Size {
            width: r.size.width - 2.0 * dx,
            height: r.size.height - 2.0 * dy,
        },
    );

    if out.size.width < 0.0 || out.size.height < 0.0 {
        log::trace!("Inset of {:?} by ({}, {}) collapsed to null", r, dx, dy);
        NULL
    } else {
        out
    }
}

#[inline]
#[must_use]
pub fn offset(r: Rect, dx: Float, dy: Float) -> Rect {
    if is_null(r) || is_infinite(r) {
        return r;
    }

    let mut out = r;
    out.origin.x += dx;
    out.origin.y += dy;
    out
}

/// The bounding box of two rectangles. Empty but non-null rectangles still contribute their position.
#[inline]
#[must_use]
pub fn union(r1: Rect, r2: Rect) -> Rect {
    if is_null(r1) {
        return r2;
    }
    if is_null(r2) {
        return r1;
    }
    if is_infinite(r1) || is_infinite(r2) {
        return INFINITE;
    }

    let (b1, b2) = (to_box(r1), to_box(r2));
    from_box(Box2D::new(b1.min.min(b2.min), b1.max.max(b2.max)))
}

/// The region shared by two rectangles. Rectangles that only touch produce a zero-sized result; rectangles
/// that are apart produce `NULL`.
#[inline]
#[must_use]
pub fn intersection(r1: Rect, r2: Rect) -> Rect {
    if is_null(r1) || is_null(r2) {
        return NULL;
    }
    if is_infinite(r1) {
        return standardize(r2);
    }
    if is_infinite(r2) {
        return standardize(r1);
    }

    let (b1, b2) = (to_box(r1), to_box(r2));
    let overlap = Box2D::new(b1.min.max(b2.min), b1.max.min(b2.max));
    if overlap.max.x < overlap.min.x || overlap.max.y < overlap.min.y {
        NULL
    } else {
        from_box(overlap)
    }
}

#[inline]
#[must_use]
pub fn intersects(r1: Rect, r2: Rect) -> bool {
    !is_empty(intersection(r1, r2))
}

#[inline]
#[must_use]
pub fn contains_point(r: Rect, p: Point) -> bool {
    if is_null(r) {
        return false;
    }

    let b = to_box(r);
    b.min.x <= p.x && p.x < b.max.x && b.min.y <= p.y && p.y < b.max.y
}

/// `r1` contains `r2` if adding `r2` to `r1` does not grow it.
#[inline]
#[must_use]
pub fn contains_rect(r1: Rect, r2: Rect) -> bool {
    equal(union(r1, r2), r1)
}

/// Compare the standardized forms of two rectangles. All null rectangles are equal to each other.
#[inline]
#[must_use]
pub fn equal(r1: Rect, r2: Rect) -> bool {
    match (is_null(r1), is_null(r2)) {
        (true, true) => true,
        (false, false) => {
            let (s1, s2) = (standardize(r1), standardize(r2));
            s1.origin == s2.origin && s1.size == s2.size
        }
        _ => false,
    }
}

/// Split `r` into the part within `amount` of `edge` and the rest. `amount` is clamped to the extent of the
/// rectangle along the axis of `edge`; NaN counts as zero.
#[must_use]
pub fn divide(r: Rect, amount: Float, edge: RectEdge) -> (Rect, Rect) {
    if is_null(r) {
        return (NULL, NULL);
    }

    let r = standardize(r);
    let extent = match edge {
        RectEdge::MinX | RectEdge::MaxX => r.size.width,
        RectEdge::MinY | RectEdge::MaxY => r.size.height,
    };
    let amount = if amount.is_nan() || amount < 0.0 {
        0.0
    } else if amount > extent {
        extent
    } else {
        amount
    };
    log::trace!("Dividing {:?} at {} from {:?}", r, amount, edge);

    let Rect {
        origin: Point { x, y },
        size: Size { width, height },
    } = r;
    let rect = |x, y, width, height| Rect::new(Point { x, y }, Size { width, height });

    match edge {
        RectEdge::MinX => (
            rect(x, y, amount, height),
            rect(x + amount, y, width - amount, height),
        ),
        RectEdge::MaxX => (
            rect(x + width - amount, y, amount, height),
            rect(x, y, width - amount, height),
        ),
        RectEdge::MinY => (
            rect(x, y, width, amount),
            rect(x, y + amount, width, height - amount),
        ),
        RectEdge::MaxY => (
            rect(x, y + height - amount, width, amount),
            rect(x, y, width, height - amount),
        ),
    }
}
