use std::fmt::Debug;

use crate::stream::{Stream, Walk};

/// A [`Stream`] that yields only the items satisfying a predicate.
///
/// This `struct` is created by [`Stream::filter()`]. See its documentation for more.
#[derive(Clone)]
pub struct Filter<S, F> {
    stream: S,
    pred: F,
}

impl<S, F> Filter<S, F> {
    pub(in crate::stream) fn new(stream: S, pred: F) -> Self {
        Self { stream, pred }
    }
}

impl<S, F> Stream for Filter<S, F>
where
    S: Stream,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.stream.next()?;
            if (self.pred)(&item) {
                return Some(item);
            }
        }
    }
}

impl<S, F> Walk for Filter<S, F>
where
    S: Walk,
    F: FnMut(&S::Item) -> bool,
{
}

impl<S: Debug, F> Debug for Filter<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("stream", &self.stream)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::test_stream;

    #[test]
    fn keeps_everything() {
        test_stream(|items| stream::of(items).filter(|_| true));
    }

    #[test]
    fn nothing_matches() {
        assert_eq!(stream::of([1, 3, 5]).filter(|x| x % 2 == 0).count(), 0);
    }
}
