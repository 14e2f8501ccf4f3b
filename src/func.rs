//! Converts closures between their two-argument and pair-argument shapes.
//!
//! Operators like [`zip()`](crate::stream::Stream::zip) and
//! [`indexed()`](crate::stream::Stream::indexed) yield pairs, while binary
//! functions often take two arguments. [`lift()`] bridges the two.
//!
//! ```
//! use pullstream::{func, prelude::*};
//!
//! let sums = stream::of([1, 2])
//!     .zip(stream::of([10, 20]))
//!     .map(func::lift(|a: i32, b: i32| a + b))
//!     .list();
//!
//! assert_eq!(sums, [11, 22]);
//! ```

/// Turns a function of two arguments into a function of one pair.
#[inline]
pub fn lift<A, B, R>(f: impl Fn(A, B) -> R) -> impl Fn((A, B)) -> R {
    move |(a, b)| f(a, b)
}

/// Turns a function of one pair into a function of two arguments.
///
/// # Examples
///
/// ```
/// use pullstream::func;
///
/// let area = func::lower(|(w, h): (u32, u32)| w * h);
/// assert_eq!(area(3, 4), 12);
/// ```
#[inline]
pub fn lower<A, B, R>(f: impl Fn((A, B)) -> R) -> impl Fn(A, B) -> R {
    move |a, b| f((a, b))
}
