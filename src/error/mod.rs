// MIT/Apache2 License

use crate::{Float, Rect};
use core::fmt;

/// Container for all errors that can happen.
///
/// The geometry itself is total: every operation on the value types is defined for every input. The only
/// fallible operations are conversions out of the floating point domain, such as turning a rectangle into a
/// pixel rectangle for a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// The null rectangle has no pixel representation.
    NullRect,
    /// The infinite rectangle has no pixel representation.
    InfiniteRect,
    /// The rectangle does not lie on integer coordinates. Use `Rect::integral` first.
    NotIntegral(Rect),
    /// A coordinate does not fit into the target integer type.
    OutOfRange(Float),
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullRect => f.write_str("The null rectangle cannot be converted to pixels"),
            Self::InfiniteRect => {
                f.write_str("The infinite rectangle cannot be converted to pixels")
            }
            Self::NotIntegral(r) => write!(f, "Rectangle is not integral: {:?}", r),
            Self::OutOfRange(fl) => write!(f, "Coordinate out of pixel range: {}", fl),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type, for convenience.
pub type Result<T> = core::result::Result<T, Error>;
