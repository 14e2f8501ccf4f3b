use std::fmt::Debug;

use crate::stream::{Stream, Walk};

/// A [`Stream`] that calls a closure on each item of the underlying stream.
///
/// This `struct` is created by [`Stream::map()`]. See its documentation for more.
#[derive(Clone)]
pub struct Map<S, F> {
    stream: S,
    f: F,
}

impl<S, F> Map<S, F> {
    pub(in crate::stream) fn new(stream: S, f: F) -> Self {
        Self { stream, f }
    }
}

impl<B, S, F> Stream for Map<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.stream.next().map(&mut self.f)
    }
}

impl<B, S, F> Walk for Map<S, F>
where
    S: Walk,
    F: FnMut(S::Item) -> B,
{
}

impl<S: Debug, F> Debug for Map<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map").field("stream", &self.stream).finish()
    }
}
