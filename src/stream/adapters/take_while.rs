use std::fmt::Debug;

use crate::stream::{Stream, Walk};

use super::UpTo;

/// A [`Stream`] that yields items as long as they satisfy a predicate.
///
/// It is an [`UpTo`] that stops at the first item failing the predicate.
///
/// This `struct` is created by [`Stream::take_while()`]. See its documentation for more.
#[derive(Clone)]
pub struct TakeWhile<S, F> {
    inner: UpTo<S, F>,
}

impl<S, F> TakeWhile<S, F> {
    pub(in crate::stream) fn new(stream: S, keep: F) -> Self {
        Self {
            inner: UpTo::stopping_on(stream, keep, false),
        }
    }
}

impl<S, F> Stream for TakeWhile<S, F>
where
    S: Stream,
    F: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<S, F> Walk for TakeWhile<S, F>
where
    S: Walk,
    F: FnMut(&S::Item) -> bool,
{
}

impl<S: Debug, F> Debug for TakeWhile<S, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhile")
            .field("inner", &self.inner)
            .finish()
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
        fn agrees_with_up_to(
            nums in propvec(0_i32..10, ..=9),
            bound in 0_i32..10,
        ) {
            agrees_with_up_to_impl(nums, bound)?;
        }
    }

    fn agrees_with_up_to_impl(nums: Vec<i32>, bound: i32) -> TestCaseResult {
        let taken = stream::of(nums.clone()).take_while(|&x| x < bound).list();
        let up_to = stream::of(nums.clone()).up_to(|&x| x >= bound).list();
        let expected: Vec<_> = nums.into_iter().take_while(|&x| x < bound).collect();

        prop_assert_eq!(&taken, &up_to);
        prop_assert_eq!(taken, expected);
        Ok(())
    }
}
