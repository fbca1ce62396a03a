// MIT/Apache2 License

//! Presentation hooks for the geometry types.
//!
//! These are not part of the geometry itself. Debuggers, inspectors and other tools that want to show a
//! value's structure can use [`Mirror`](trait.Mirror.html) to list its named fields and to get a compact
//! [`QuickLook`](enum.QuickLook.html) summary of it.

use crate::{Float, Point, Rect, Size, Vector};
use core::fmt;

/// The value of one field of a mirrored type.
#[derive(Copy, Clone, PartialEq)]
pub enum Child {
    Scalar(Float),
    Point(Point),
    Size(Size),
}

impl fmt::Debug for Child {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => fmt::Debug::fmt(s, f),
            Self::Point(p) => fmt::Debug::fmt(p, f),
            Self::Size(s) => fmt::Debug::fmt(s, f),
        }
    }
}

/// A compact summary of a value, for display by inspection tools.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum QuickLook {
    Point(f64, f64),
    Size(f64, f64),
    Rectangle(f64, f64, f64, f64),
}

/// A value whose structure can be inspected.
///
/// # Example
///
/// ```rust
/// # use cg_geometry::{mirror::{Child, Mirror, QuickLook}, Point, Rect};
/// let r = Rect::from_components(1, 2, 3, 4);
/// let [(name, value), _] = r.children();
/// assert_eq!(name, "origin");
/// assert_eq!(value, Child::Point(Point::new(1, 2)));
/// assert_eq!(r.quick_look(), Some(QuickLook::Rectangle(1.0, 2.0, 3.0, 4.0)));
/// ```
pub trait Mirror {
    /// The named fields of this value, in declaration order.
    fn children(&self) -> [(&'static str, Child); 2];

    /// A summary of this value, if there is one for its type.
    fn quick_look(&self) -> Option<QuickLook>;
}

impl Mirror for Point {
    #[inline]
    fn children(&self) -> [(&'static str, Child); 2] {
        [("x", Child::Scalar(self.x)), ("y", Child::Scalar(self.y))]
    }

    #[inline]
    fn quick_look(&self) -> Option<QuickLook> {
        Some(QuickLook::Point(self.x, self.y))
    }
}

impl Mirror for Size {
    #[inline]
    fn children(&self) -> [(&'static str, Child); 2] {
        [
            ("width", Child::Scalar(self.width)),
            ("height", Child::Scalar(self.height)),
        ]
    }

    #[inline]
    fn quick_look(&self) -> Option<QuickLook> {
        Some(QuickLook::Size(self.width, self.height))
    }
}

// vectors have no dedicated summary
impl Mirror for Vector {
    #[inline]
    fn children(&self) -> [(&'static str, Child); 2] {
        [("dx", Child::Scalar(self.dx)), ("dy", Child::Scalar(self.dy))]
    }

    #[inline]
    fn quick_look(&self) -> Option<QuickLook> {
        None
    }
}

impl Mirror for Rect {
    #[inline]
    fn children(&self) -> [(&'static str, Child); 2] {
        [
            ("origin", Child::Point(self.origin)),
            ("size", Child::Size(self.size)),
        ]
    }

    /// The stored fields, not the standardized ones.
    #[inline]
    fn quick_look(&self) -> Option<QuickLook> {
        Some(QuickLook::Rectangle(
            self.origin.x,
            self.origin.y,
            self.size.width,
            self.size.height,
        ))
    }
}
