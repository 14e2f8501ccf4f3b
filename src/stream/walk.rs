use crate::stream::{Stream, Streamable};

/// Marker for streams that are known to end.
///
/// A stream is a [`Walk`] when it is drawn from a finite source,
/// such as a collection or a bounded [`limit()`](Stream::limit).
/// Consumers that need every item, like [`list()`](Stream::list) or
/// [`foldr()`](Stream::foldr), only return on streams that end;
/// requiring [`Walk`] lets an API state that need in its signature.
///
/// This trait adds no behavior. Implementing it for a stream that never ends
/// is not unsafe, but makes such APIs hang.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// fn total(walk: impl Walk<Item = i32>) -> i32 {
///     walk.foldl(0, |a, b| a + b)
/// }
///
/// assert_eq!(total(stream::of([1, 2, 3])), 6);
/// assert_eq!(total(stream::of(1..).limit(3)), 6);
/// ```
pub trait Walk: Stream {}

impl<W: Walk + ?Sized> Walk for &mut W {}

impl<W: Walk + ?Sized> Walk for Box<W> {}

/// Marker for [`Streamable`] containers that are finite,
/// so that the streams they hand out end.
pub trait Walkable: Streamable {}
