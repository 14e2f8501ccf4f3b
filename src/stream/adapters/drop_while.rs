use std::fmt::Debug;

use crate::stream::{Stream, Walk};

/// A [`Stream`] that skips the leading items satisfying a predicate.
///
/// This `struct` is created by [`Stream::drop_while()`]. See its documentation for more.
#[derive(Clone)]
pub struct DropWhile<S, F> {
    stream: S,
    // Dropped once the first non-matching item has been met.
    pred: Option<F>,
}

impl<S, F> DropWhile<S, F> {
    pub(in crate::stream) fn new(stream: S, pred: F) -> Self {
        Self {
            stream,
            pred: Some(pred),
        }
    }
}

impl<S, F> Stream for DropWhile<S, F>
where
    S: Stream,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(mut pred) = self.pred.take() else {
            return self.stream.next();
        };

        loop {
            let item = self.stream.next()?;
            if !pred(&item) {
                return Some(item);
            }
        }
    }
}

impl<S, F> Walk for DropWhile<S, F>
where
    S: Walk,
    F: FnMut(&S::Item) -> bool,
{
}

impl<S: Debug, F> Debug for DropWhile<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DropWhile")
            .field("stream", &self.stream)
            .field("dropping", &self.pred.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::{assert_stream_yields, test_stream};

    #[test]
    fn later_matches_are_kept() {
        assert_stream_yields(stream::of([1, 2, 5, 1, 2]).drop_while(|&x| x < 3), &[5, 1, 2]);
    }

    #[test]
    fn everything_dropped() {
        assert_stream_yields(stream::of([1, 2]).drop_while(|_| true), &[]);
    }

    #[test]
    fn never_matching_is_identity() {
        test_stream(|items| stream::of(items).drop_while(|_| false));
    }

    #[test]
    fn predicate_stops_being_called() {
        let mut calls = 0;
        let list = stream::of([1, 5, 1, 1])
            .drop_while(|&x| {
                calls += 1;
                x < 3
            })
            .list();

        assert_eq!(list, [5, 1, 1]);
        assert_eq!(calls, 2);
    }
}
