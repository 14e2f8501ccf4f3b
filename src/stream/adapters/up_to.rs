use std::fmt::Debug;

use crate::stream::{Stream, Walk};

/// A [`Stream`] that yields items until one satisfies a stop predicate.
///
/// This `struct` is created by [`Stream::up_to()`]. See its documentation for more.
#[derive(Clone)]
pub struct UpTo<S, F> {
    stream: S,
    // `None` once the stop item (or the end) has been met.
    stop: Option<F>,
    // The predicate result that stops the stream.
    stop_on: bool,
}

impl<S, F> UpTo<S, F> {
    pub(in crate::stream) fn new(stream: S, stop: F) -> Self {
        Self::stopping_on(stream, stop, true)
    }

    /// Stops at the first item for which `pred` returns `stop_on`.
    pub(super) fn stopping_on(stream: S, pred: F, stop_on: bool) -> Self {
        Self {
            stream,
            stop: Some(pred),
            stop_on,
        }
    }
}

impl<S, F> Stream for UpTo<S, F>
where
    S: Stream,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let stop = self.stop.as_mut()?;

        match self.stream.next() {
            Some(item) if stop(&item) != self.stop_on => Some(item),
            _ => {
                self.stop = None;
                None
            }
        }
    }
}

impl<S, F> Walk for UpTo<S, F>
where
    S: Walk,
    F: FnMut(&S::Item) -> bool,
{
}

impl<S: Debug, F> Debug for UpTo<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpTo")
            .field("stream", &self.stream)
            .field("stopped", &self.stop.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::{assert_stream_yields, test_stream};

    #[test]
    fn stops_before_match() {
        assert_stream_yields(stream::of([1, 2, 3, 4]).up_to(|x| x % 3 == 0), &[1, 2]);
    }

    #[test]
    fn never_matching_is_identity() {
        test_stream(|items| stream::of(items).up_to(|_| false));
    }

    #[test]
    fn does_not_pull_after_stop() {
        let mut pulled = 0;
        let mut stream = stream::of([1, 2, 3, 4])
            .inspect(|_| pulled += 1)
            .up_to(|&x| x == 2);

        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
        drop(stream);
        assert_eq!(pulled, 2);
    }
}
