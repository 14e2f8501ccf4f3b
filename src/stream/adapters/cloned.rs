use crate::stream::{Stream, Walk};

/// A [`Stream`] that clones the items of an underlying stream of references.
///
/// This `struct` is created by [`Stream::cloned()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Cloned<S> {
    stream: S,
}

impl<S> Cloned<S> {
    pub(in crate::stream) fn new(stream: S) -> Self {
        Self { stream }
    }
}

impl<'a, T, S> Stream for Cloned<S>
where
    T: Clone + 'a,
    S: Stream<Item = &'a T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.stream.next().cloned()
    }
}

impl<'a, T, S> Walk for Cloned<S>
where
    T: Clone + 'a,
    S: Walk<Item = &'a T>,
{
}
