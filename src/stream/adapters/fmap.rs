use std::fmt::Debug;

use crate::stream::{Stream, Walk};

/// A [`Stream`] that maps each item to a sub-stream and yields the items of the
/// sub-streams one after another.
///
/// This `struct` is created by [`Stream::fmap()`]. See its documentation for more.
#[derive(Clone)]
pub struct FMap<S, U, F> {
    stream: S,
    current: Option<U>,
    f: F,
}

impl<S, U, F> FMap<S, U, F> {
    pub(in crate::stream) fn new(stream: S, f: F) -> Self {
        Self {
            stream,
            current: None,
            f,
        }
    }
}

impl<S, U, F> Stream for FMap<S, U, F>
where
    S: Stream,
    U: Stream,
    F: FnMut(S::Item) -> U,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<U::Item> {
        loop {
            if let Some(ref mut current) = self.current {
                if let Some(item) = current.next() {
                    return Some(item);
                }
                self.current = None;
            }

            // The outer stream ending ends this one, whatever sub-stream came before.
            self.current = Some((self.f)(self.stream.next()?));
        }
    }
}

impl<S, U, F> Walk for FMap<S, U, F>
where
    S: Walk,
    U: Walk,
    F: FnMut(S::Item) -> U,
{
}

impl<S: Debug, U: Debug, F> Debug for FMap<S, U, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FMap")
            .field("stream", &self.stream)
            .field("current", &self.current)
            .finish()
    }
}

/// A [`Stream`] that flattens a stream of streams.
///
/// This `struct` is created by [`Stream::flatten()`]. See its documentation for more.
pub struct Flatten<S: Stream> {
    inner: FMap<S, S::Item, fn(S::Item) -> S::Item>,
}

impl<S: Stream> Flatten<S> {
    pub(in crate::stream) fn new(stream: S) -> Self {
        Self {
            inner: FMap::new(stream, std::convert::identity as fn(S::Item) -> S::Item),
        }
    }
}

impl<S> Stream for Flatten<S>
where
    S: Stream,
    S::Item: Stream,
{
    type Item = <S::Item as Stream>::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<S> Walk for Flatten<S>
where
    S: Walk,
    S::Item: Walk,
{
}

impl<S> Clone for Flatten<S>
where
    S: Stream + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<S> Debug for Flatten<S>
where
    S: Stream + Debug,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flatten")
            .field("stream", &self.inner.stream)
            .field("current", &self.inner.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::assert_stream_yields;

    #[test]
    fn concatenates_in_order() {
        let stream = stream::of([1, 2, 3]).fmap(|x| stream::of([x, x]));
        assert_stream_yields(stream, &[1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn skips_empty_sub_streams() {
        let stream = stream::of([0_usize, 2, 0, 0, 1, 0]).fmap(|n| stream::of(vec![n; n]));
        assert_stream_yields(stream, &[2, 2, 1]);
    }

    #[test]
    fn empty_outer_stream() {
        let stream = stream::empty::<i32>().fmap(|x| stream::of([x]));
        assert_stream_yields(stream, &[]);
    }

    #[test]
    fn is_lazy_over_sub_streams() {
        let mut made = 0;
        let mut stream = stream::of([1, 2, 3]).fmap(|x| {
            made += 1;
            stream::of([x, x])
        });

        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), Some(1));
        drop(stream);
        assert_eq!(made, 1);
    }

    #[test]
    fn flatten_nested_walks() {
        let nested = vec![vec![1], vec![], vec![2, 3]];
        let flat = nested.stream().fmap(|inner| inner.stream()).copied().list();

        assert_eq!(flat, [1, 2, 3]);
        assert_eq!(stream::of(nested).map(stream::of).flatten().list(), [1, 2, 3]);
    }
}
