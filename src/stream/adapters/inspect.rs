use std::fmt::Debug;

use crate::stream::{Stream, Walk};

/// A [`Stream`] that calls a closure on a reference to each item before yielding it.
///
/// This `struct` is created by [`Stream::inspect()`]. See its documentation for more.
#[derive(Clone)]
pub struct Inspect<S, F> {
    stream: S,
    f: F,
}

impl<S, F> Inspect<S, F> {
    pub(in crate::stream) fn new(stream: S, f: F) -> Self {
        Self { stream, f }
    }
}

impl<S, F> Stream for Inspect<S, F>
where
    S: Stream,
    F: FnMut(&S::Item),
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.stream.next()?;
        (self.f)(&item);
        Some(item)
    }
}

impl<S, F> Walk for Inspect<S, F>
where
    S: Walk,
    F: FnMut(&S::Item),
{
}

impl<S: Debug, F> Debug for Inspect<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspect")
            .field("stream", &self.stream)
            .finish()
    }
}
