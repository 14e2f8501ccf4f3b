use crate::stream::{Stream, Walk};

/// A [`Stream`] that pulls two streams in lockstep until both are exhausted.
///
/// This `struct` is created by [`Stream::zip_long()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct ZipLong<A, B> {
    a: A,
    b: B,
}

impl<A, B> ZipLong<A, B> {
    pub(in crate::stream) fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B> Stream for ZipLong<A, B>
where
    A: Stream,
    B: Stream,
{
    type Item = (Option<A::Item>, Option<B::Item>);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.a.next(), self.b.next()) {
            (None, None) => None,
            pair => Some(pair),
        }
    }
}

impl<A: Walk, B: Walk> Walk for ZipLong<A, B> {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::assert_stream_yields;

    #[test]
    fn pads_shorter_side() {
        assert_stream_yields(
            stream::of([1, 2, 3]).zip_long(stream::of([2, 4])),
            &[(Some(1), Some(2)), (Some(2), Some(4)), (Some(3), None)],
        );
        assert_stream_yields(
            stream::of([1]).zip_long(stream::of([2, 4])),
            &[(Some(1), Some(2)), (None, Some(4))],
        );
    }

    #[test]
    fn both_empty() {
        assert_stream_yields(stream::empty::<i32>().zip_long(stream::empty::<i32>()), &[]);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn length_is_max(
            a in propvec(any::<i32>(), ..=9),
            b in propvec(any::<u8>(), ..=9),
        ) {
            length_is_max_impl(a, b)?;
        }
    }

    fn length_is_max_impl(a: Vec<i32>, b: Vec<u8>) -> TestCaseResult {
        let zipped = stream::of(a.clone()).zip_long(stream::of(b.clone())).list();

        prop_assert_eq!(zipped.len(), a.len().max(b.len()));
        for (i, (x, y)) in zipped.into_iter().enumerate() {
            prop_assert_eq!(x, a.get(i).copied());
            prop_assert_eq!(y, b.get(i).copied());
        }
        Ok(())
    }
}
