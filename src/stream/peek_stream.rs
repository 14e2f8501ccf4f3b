use crate::stream::Stream;

/// A [`Stream`] that can show its next item without consuming it.
///
/// Peeking may pull the underlying source, but the item stays in place:
/// the next call to [`next()`](Stream::next) returns it.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let mut stream = stream::of([1, 2, 3]).peekable();
///
/// let mut small = vec![];
/// while let Some(x) = stream.next_if(|&x| x < 3) {
///     small.push(x);
/// }
///
/// assert_eq!(small, [1, 2]);
/// assert_eq!(stream.peek(), Some(&3));
/// ```
pub trait PeekStream: Stream {
    /// Returns a reference to the next item, or [`None`] if the stream is over.
    fn peek(&mut self) -> Option<&Self::Item>;

    /// Consumes and returns the next item if it satisfies `pred`.
    /// Otherwise the item stays in place and [`None`] is returned.
    fn next_if<F>(&mut self, pred: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnOnce(&Self::Item) -> bool,
    {
        if pred(self.peek()?) { self.next() } else { None }
    }
}

impl<P: PeekStream + ?Sized> PeekStream for &mut P {
    #[inline]
    fn peek(&mut self) -> Option<&Self::Item> {
        P::peek(self)
    }
}
