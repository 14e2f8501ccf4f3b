use crate::stream::{Stream, Walk};

/// A [`Stream`] that yields the items of one stream, then the items of another.
///
/// This `struct` is created by [`Stream::then()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Then<A, B> {
    // `None` once the first stream is exhausted.
    first: Option<A>,
    second: B,
}

impl<A, B> Then<A, B> {
    pub(in crate::stream) fn new(first: A, second: B) -> Self {
        Self {
            first: Some(first),
            second,
        }
    }
}

impl<A, B> Stream for Then<A, B>
where
    A: Stream,
    B: Stream<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = &mut self.first {
            match first.next() {
                None => self.first = None,
                item => return item,
            }
        }

        self.second.next()
    }
}

impl<A, B> Walk for Then<A, B>
where
    A: Walk,
    B: Walk<Item = A::Item>,
{
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::{assert_stream_yields, test_stream};

    #[test]
    fn concatenates() {
        assert_stream_yields(stream::of([1, 2]).then(stream::of([3, 4])), &[1, 2, 3, 4]);
    }

    #[test]
    fn empty_sides_are_neutral() {
        test_stream(|items| stream::empty().then(stream::of(items)));
        test_stream(|items| stream::of(items).then(stream::empty()));
    }

    #[test]
    fn first_dropped_when_exhausted() {
        let mut stream = stream::of([1]).then(stream::of([2]));
        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), Some(2));
        assert!(format!("{stream:?}").starts_with("Then { first: None"));
    }
}
