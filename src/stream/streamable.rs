use std::{
    collections::{VecDeque, vec_deque},
    iter::Rev,
    slice,
};

use crate::stream::{IterStream, Stream, Walkable};

/// A container that hands out [`Stream`] views of its items.
///
/// The view borrows the container, so the container cannot change while it is
/// pulled. Two views taken from the same unchanged container yield the same
/// items in the same order.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use pullstream::prelude::*;
///
/// let deque = VecDeque::from([1, 2, 3]);
///
/// assert_eq!(deque.stream().count(), 3);
/// assert_eq!(deque.stream().copied().list(), [1, 2, 3]);
/// ```
pub trait Streamable {
    /// The type of the items the views yield.
    type Item<'a>
    where
        Self: 'a;

    /// The type of the view.
    type Stream<'a>: Stream<Item = Self::Item<'a>>
    where
        Self: 'a;

    /// Creates a new view over the items of this container.
    fn stream(&self) -> Self::Stream<'_>;
}

impl<T> Streamable for [T] {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    type Stream<'a>
        = IterStream<slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn stream(&self) -> Self::Stream<'_> {
        IterStream::new(self.iter())
    }
}

impl<T> Walkable for [T] {}

impl<T> Streamable for Vec<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    type Stream<'a>
        = IterStream<slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn stream(&self) -> Self::Stream<'_> {
        self.as_slice().stream()
    }
}

impl<T> Walkable for Vec<T> {}

impl<T> Streamable for VecDeque<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    type Stream<'a>
        = IterStream<vec_deque::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn stream(&self) -> Self::Stream<'_> {
        IterStream::new(self.iter())
    }
}

impl<T> Walkable for VecDeque<T> {}

/// A [`Streamable`] container that can also hand out views from its last item
/// to its first.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let items = vec![1, 2, 3];
///
/// assert_eq!(items.reverse_stream().copied().list(), [3, 2, 1]);
/// assert_eq!(items.stream().copied().list(), [1, 2, 3]);
/// ```
pub trait ReverseStreamable: Streamable {
    /// The type of the reversed view.
    type ReverseStream<'a>: Stream<Item = Self::Item<'a>>
    where
        Self: 'a;

    /// Creates a new view over the items of this container, last item first.
    fn reverse_stream(&self) -> Self::ReverseStream<'_>;
}

impl<T> ReverseStreamable for [T] {
    type ReverseStream<'a>
        = IterStream<Rev<slice::Iter<'a, T>>>
    where
        Self: 'a;

    #[inline]
    fn reverse_stream(&self) -> Self::ReverseStream<'_> {
        IterStream::new(self.iter().rev())
    }
}

impl<T> ReverseStreamable for Vec<T> {
    type ReverseStream<'a>
        = IterStream<Rev<slice::Iter<'a, T>>>
    where
        Self: 'a;

    #[inline]
    fn reverse_stream(&self) -> Self::ReverseStream<'_> {
        self.as_slice().reverse_stream()
    }
}

impl<T> ReverseStreamable for VecDeque<T> {
    type ReverseStream<'a>
        = IterStream<Rev<vec_deque::Iter<'a, T>>>
    where
        Self: 'a;

    #[inline]
    fn reverse_stream(&self) -> Self::ReverseStream<'_> {
        IterStream::new(self.iter().rev())
    }
}
