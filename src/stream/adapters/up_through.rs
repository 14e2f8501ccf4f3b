use std::fmt::Debug;

use crate::stream::{Stream, Walk};

/// A [`Stream`] that yields items up to and including the first one satisfying
/// a stop predicate.
///
/// This `struct` is created by [`Stream::up_through()`]. See its documentation for more.
#[derive(Clone)]
pub struct UpThrough<S, F> {
    stream: S,
    stop: Option<F>,
}

impl<S, F> UpThrough<S, F> {
    pub(in crate::stream) fn new(stream: S, stop: F) -> Self {
        Self {
            stream,
            stop: Some(stop),
        }
    }
}

impl<S, F> Stream for UpThrough<S, F>
where
    S: Stream,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let stop = self.stop.as_mut()?;

        let Some(item) = self.stream.next() else {
            self.stop = None;
            return None;
        };

        if stop(&item) {
            self.stop = None;
        }
        Some(item)
    }
}

impl<S, F> Walk for UpThrough<S, F>
where
    S: Walk,
    F: FnMut(&S::Item) -> bool,
{
}

impl<S: Debug, F> Debug for UpThrough<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpThrough")
            .field("stream", &self.stream)
            .field("stopped", &self.stop.is_none())
            .finish()
    }
}
