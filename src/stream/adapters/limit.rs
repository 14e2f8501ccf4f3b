use crate::stream::{Stream, Walk};

/// A [`Stream`] that yields at most `n` items of the underlying stream.
///
/// Because it is bounded, it is a [`Walk`] whatever the underlying stream is.
///
/// This `struct` is created by [`Stream::limit()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Limit<S> {
    stream: S,
    remaining: usize,
}

impl<S> Limit<S> {
    pub(in crate::stream) fn new(stream: S, n: usize) -> Self {
        Self {
            stream,
            remaining: n,
        }
    }
}

impl<S: Stream> Stream for Limit<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        match self.stream.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}

impl<S: Stream> Walk for Limit<S> {}


#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn yields_min_of_len_and_limit(
            nums in propvec(any::<i32>(), ..=9),
            n in 0_usize..=12,
        ) {
            yields_min_of_len_and_limit_impl(nums, n)?;
        }
    }

    fn yields_min_of_len_and_limit_impl(nums: Vec<i32>, n: usize) -> TestCaseResult {
        let limited = stream::of(nums.clone()).limit(n).list();

        prop_assert_eq!(limited.len(), nums.len().min(n));
        prop_assert_eq!(&limited[..], &nums[..limited.len()]);
        Ok(())
    }
}
