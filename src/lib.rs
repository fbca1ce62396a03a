// MIT/Apache2 License

//! `cg-geometry` provides the basic value types used to describe 2D geometry: points, sizes, vectors and
//! rectangles. The types are plain `Copy` structs with public fields, convenience constructors, and the
//! rectangle algebra (union, intersection, inset, offset, containment, splitting) expected from a native
//! graphics library.
//!
//! The value types never compute anything themselves. Every derived value and every transform is forwarded
//! to the [`primitives`](primitives/index.html) module, which defines the native semantics: rectangles with a
//! negative size are read as if they were standardized, and the `NULL` and `INFINITE` sentinel rectangles are
//! special-cased by the set algebra.
//!
//! ## Example
//!
//! ```rust
//! use cg_geometry::{Rect, RectEdge};
//!
//! let a = Rect::from_components(0, 0, 10, 10);
//! let b = Rect::from_components(5, 5, 10, 10);
//! assert_eq!(a.intersection(&b), Rect::from_components(5, 5, 5, 5));
//!
//! // the null rectangle is the identity of the union
//! assert_eq!(a.union(&Rect::NULL), a);
//!
//! let (slice, remainder) = a.divide(3.0, RectEdge::MinX);
//! assert_eq!(slice.width() + remainder.width(), a.width());
//! ```
//!
//! ## Features
//!
//! * `std` (enabled by default) - Enables use of the Rust standard library. This implements
//!   `std::error::Error` for the error type and lets `euclid` use the standard float routines. Without it,
//!   the crate is `no_std` and rounding goes through `libm`.

#![no_std]
#![warn(clippy::pedantic)]

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod error;
pub mod geometry;
pub mod mirror;
pub mod primitives;
pub mod transform;

pub use error::*;
pub use geometry::{
    point, rect, size, vector, Pixel, PixelRect, Point, Rect, RectEdge, Size, Vector, POINT_ZERO,
    RECT_ZERO, SIZE_ZERO,
};
pub use transform::AffineTransform;

/// The canonical scalar type used for every coordinate and dimension.
pub type Float = f64;
