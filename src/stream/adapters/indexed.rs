use crate::stream::{Stream, Walk};

/// A [`Stream`] that pairs each item with its index.
///
/// This `struct` is created by [`Stream::indexed()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Indexed<S> {
    stream: S,
    index: usize,
}

impl<S> Indexed<S> {
    pub(in crate::stream) fn new(stream: S) -> Self {
        Self { stream, index: 0 }
    }
}

impl<S: Stream> Stream for Indexed<S> {
    type Item = (usize, S::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stream.next()?;
        let index = self.index;
        self.index += 1;
        Some((index, item))
    }
}

impl<S: Walk> Walk for Indexed<S> {}
