use std::{collections::HashSet, fmt::Debug, hash::Hash};

use crate::stream::{Stream, Walk};

/// A [`Stream`] that yields each distinct item once, in first-seen order.
///
/// This `struct` is created by [`Stream::distinct()`]. See its documentation for more.
pub struct Distinct<S: Stream> {
    stream: S,
    seen: HashSet<S::Item>,
}

impl<S: Stream> Distinct<S> {
    pub(in crate::stream) fn new(stream: S) -> Self {
        Self {
            stream,
            seen: HashSet::new(),
        }
    }
}

impl<S> Stream for Distinct<S>
where
    S: Stream,
    S::Item: Eq + Hash + Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.stream.next()?;
            if !self.seen.contains(&item) {
                self.seen.insert(item.clone());
                return Some(item);
            }
        }
    }
}

impl<S> Walk for Distinct<S>
where
    S: Walk,
    S::Item: Eq + Hash + Clone,
{
}

impl<S> Clone for Distinct<S>
where
    S: Stream + Clone,
    S::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            stream: self.stream.clone(),
            seen: self.seen.clone(),
        }
    }
}

impl<S> Debug for Distinct<S>
where
    S: Stream + Debug,
    S::Item: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Distinct")
            .field("stream", &self.stream)
            .field("seen", &self.seen)
            .finish()
    }
}

/// A [`Stream`] that yields only the first item of each distinct key.
///
/// This `struct` is created by [`Stream::distinct_by()`]. See its documentation for more.
#[derive(Clone)]
pub struct DistinctBy<S, K, F> {
    stream: S,
    seen: HashSet<K>,
    selector: F,
}

impl<S, K, F> DistinctBy<S, K, F> {
    pub(in crate::stream) fn new(stream: S, selector: F) -> Self {
        Self {
            stream,
            seen: HashSet::new(),
            selector,
        }
    }
}

impl<S, K, F> Stream for DistinctBy<S, K, F>
where
    S: Stream,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let item = self.stream.next()?;
            if self.seen.insert((self.selector)(&item)) {
                return Some(item);
            }
        }
    }
}

impl<S, K, F> Walk for DistinctBy<S, K, F>
where
    S: Walk,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
}

impl<S: Debug, K: Debug, F> Debug for DistinctBy<S, K, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DistinctBy")
            .field("stream", &self.stream)
            .field("seen", &self.seen)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::{assert_stream_yields, test_stream};

    #[test]
    fn first_seen_order() {
        assert_stream_yields(
            stream::of([1, 1, 2, 3, 1, 2, 3, 3, 2]).distinct(),
            &[1, 2, 3],
        );
    }

    #[test]
    fn already_distinct_is_identity() {
        test_stream(|items| stream::of(items).distinct());
    }

    #[test]
    fn by_key_keeps_first_of_each_key() {
        assert_stream_yields(
            stream::of([2, 3, 2, 5, 4, 6, 4, 2]).distinct_by(|x| x / 2),
            &[2, 5, 6],
        );
    }

    #[test]
    fn works_on_infinite_streams() {
        let list = stream::of(0..).distinct_by(|x| x % 3).limit(3).list();
        assert_eq!(list, [0, 1, 2]);
    }
}

#[cfg(test)]
mod proptests {
    use std::collections::HashSet;

    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;

    proptest! {
        #[test]
        fn idempotent_and_complete(
            nums in propvec(0_i32..5, ..=12),
        ) {
            idempotent_and_complete_impl(nums)?;
        }
    }

    fn idempotent_and_complete_impl(nums: Vec<i32>) -> TestCaseResult {
        let once = stream::of(nums.clone()).distinct().list();
        let twice = stream::of(once.clone()).distinct().list();

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(
            once.iter().copied().collect::<HashSet<_>>(),
            nums.iter().copied().collect::<HashSet<_>>()
        );
        prop_assert_eq!(once.len(), nums.iter().collect::<HashSet<_>>().len());
        Ok(())
    }
}
