use std::iter::{Flatten, Fuse};

use crate::stream::{Stream, Walk};

/// A [`Stream`] pulling from an [`Iterator`].
///
/// The iterator is fused, so an iterator that resumes after returning
/// [`None`] still makes a well-behaved stream.
///
/// This `struct` is created by [`of()`] and [`IntoStream::into_stream()`].
/// See their documentation for more.
#[derive(Debug, Clone)]
pub struct IterStream<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> IterStream<I> {
    #[inline]
    pub(in crate::stream) fn new(iter: I) -> Self {
        Self { iter: iter.fuse() }
    }
}

impl<I: Iterator> Stream for IterStream<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

// Only iterators reporting an exact length are known to end.
impl<I: ExactSizeIterator> Walk for IterStream<I> {}

/// Creates a [`Stream`] over the items of anything iterable.
///
/// Arrays, ranges, collections and iterators all qualify.
/// The source is not touched until the stream is pulled.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// assert_eq!(stream::of([1, 2, 3]).list(), [1, 2, 3]);
/// assert_eq!(stream::of(1..=3).foldl(0, |a, b| a + b), 6);
/// assert_eq!(stream::of("abc".chars()).count(), 3);
/// ```
#[inline]
pub fn of<I: IntoIterator>(items: I) -> IterStream<I::IntoIter> {
    IterStream::new(items.into_iter())
}

/// Creates a [`Stream`] over the present items of an iterable of [`Option`]s.
///
/// Every [`None`] is skipped. To skip absent items of a borrowed container,
/// map it with [`Option::as_ref`] first.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// assert_eq!(stream::pure([Some(1), None, Some(3)]).list(), [1, 3]);
///
/// let items = vec![None, Some('a'), None];
/// assert_eq!(stream::pure(items.iter().map(Option::as_ref)).list(), [&'a']);
/// ```
#[inline]
pub fn pure<I, T>(items: I) -> IterStream<Flatten<I::IntoIter>>
where
    I: IntoIterator<Item = Option<T>>,
{
    IterStream::new(items.into_iter().flatten())
}

/// Converts anything iterable into a [`Stream`].
///
/// This trait is implemented for every [`IntoIterator`], iterators included.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// assert_eq!("a,b".split(',').into_stream().list(), ["a", "b"]);
/// assert_eq!(vec![1, 2].into_stream().count(), 2);
/// ```
pub trait IntoStream: IntoIterator + Sized {
    /// Wraps the iterator of `self` into a fused [`Stream`].
    #[inline]
    fn into_stream(self) -> IterStream<Self::IntoIter> {
        IterStream::new(self.into_iter())
    }
}

impl<I: IntoIterator> IntoStream for I {}
