use std::{fmt::Debug, marker::PhantomData};

use crate::stream::{PeekStream, Stream, Walk};

/// A [`Stream`] that yields nothing.
///
/// This `struct` is created by [`empty()`]. See its documentation for more.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// Creates a [`Stream`] that yields nothing.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let mut empty = stream::empty::<i32>();
///
/// assert_eq!(empty.next(), None);
/// assert_eq!(empty.count(), 0);
/// ```
#[inline]
pub const fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Stream for Empty<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }
}

impl<T> PeekStream for Empty<T> {
    #[inline]
    fn peek(&mut self) -> Option<&T> {
        None
    }
}

impl<T> Walk for Empty<T> {}

impl<T> Clone for Empty<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Default for Empty<T> {
    #[inline]
    fn default() -> Self {
        empty()
    }
}

impl<T> Debug for Empty<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Empty")
    }
}
