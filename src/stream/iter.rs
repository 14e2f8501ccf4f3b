use std::iter::FusedIterator;

use crate::stream::Stream;

/// The [`Iterator`] returned by [`Stream::iter()`].
///
/// It is fused, following the exhaustion rule of [`Stream`].
#[derive(Debug, Clone)]
pub struct Iter<S> {
    stream: S,
}

impl<S> Iter<S> {
    #[inline]
    pub(in crate::stream) fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Returns the underlying stream.
    #[inline]
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Stream> Iterator for Iter<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        self.stream.next()
    }
}

impl<S: Stream> FusedIterator for Iter<S> {}
