use crate::stream::{Stream, Walk};

/// A [`Stream`] that copies the items of an underlying stream of references.
///
/// This `struct` is created by [`Stream::copied()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Copied<S> {
    stream: S,
}

impl<S> Copied<S> {
    pub(in crate::stream) fn new(stream: S) -> Self {
        Self { stream }
    }
}

impl<'a, T, S> Stream for Copied<S>
where
    T: Copy + 'a,
    S: Stream<Item = &'a T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.stream.next().copied()
    }
}

impl<'a, T, S> Walk for Copied<S>
where
    T: Copy + 'a,
    S: Walk<Item = &'a T>,
{
}
