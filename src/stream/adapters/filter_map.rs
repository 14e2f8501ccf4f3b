use std::fmt::Debug;

use crate::stream::{Stream, Walk};

/// A [`Stream`] that filters and maps the items of the underlying stream in one step.
///
/// This `struct` is created by [`Stream::filter_map()`]. See its documentation for more.
#[derive(Clone)]
pub struct FilterMap<S, F> {
    stream: S,
    f: F,
}

impl<S, F> FilterMap<S, F> {
    pub(in crate::stream) fn new(stream: S, f: F) -> Self {
        Self { stream, f }
    }
}

impl<B, S, F> Stream for FilterMap<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> Option<B>,
{
    type Item = B;

    fn next(&mut self) -> Option<B> {
        loop {
            if let Some(mapped) = (self.f)(self.stream.next()?) {
                return Some(mapped);
            }
        }
    }
}

impl<B, S, F> Walk for FilterMap<S, F>
where
    S: Walk,
    F: FnMut(S::Item) -> Option<B>,
{
}

impl<S: Debug, F> Debug for FilterMap<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMap")
            .field("stream", &self.stream)
            .finish()
    }
}
