// MIT/Apache2 License

//! Basic geometric value types.
//!
//! `Point`, `Size` and `Vector` are pairs of floats; `Rect` is an origin and a size. All of them are `Copy`,
//! so mutating one is always a matter of assigning a new value.

mod point;
mod rect;
mod size;
mod vector;

pub use point::{point, Point};
pub use rect::{rect, Rect, RectEdge};
pub use size::{size, Size};
pub use vector::{vector, Vector};

/// Unit for pixels or screen area.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Pixel;

/// A rectangle on a drawing surface, in whole pixels.
pub type PixelRect = euclid::Rect<i32, Pixel>;

/// The point at `(0, 0)`.
pub const POINT_ZERO: Point = Point::ZERO;
/// The size with zero width and zero height.
pub const SIZE_ZERO: Size = Size::ZERO;
/// The rectangle at `(0, 0)` with a zero size.
pub const RECT_ZERO: Rect = Rect::ZERO;
