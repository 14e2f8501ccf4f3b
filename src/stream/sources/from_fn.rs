use std::fmt::Debug;

use crate::stream::Stream;

/// A [`Stream`] that calls a closure for each item.
///
/// This `struct` is created by [`from_fn()`]. See its documentation for more.
#[derive(Clone)]
pub struct FromFn<F> {
    // Dropped after the closure first returns `None`.
    f: Option<F>,
}

/// Creates a [`Stream`] that calls `f` for each item, until `f` returns [`None`].
///
/// After the first [`None`], `f` is never called again.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let mut n = 0;
/// let stream = stream::from_fn(|| {
///     n += 1;
///     (n <= 3).then_some(n)
/// });
///
/// assert_eq!(stream.list(), [1, 2, 3]);
/// ```
#[inline]
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn { f: Some(f) }
}

impl<T, F> Stream for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let item = (self.f.as_mut()?)();
        if item.is_none() {
            self.f = None;
        }
        item
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn")
            .field("exhausted", &self.f.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn never_called_after_none() {
        let mut calls = 0;
        let mut stream = stream::from_fn(|| {
            calls += 1;
            // Would resume at the third call.
            (calls != 2).then_some(calls)
        });

        assert_eq!(stream.next(), Some(1));
        assert_eq!(stream.next(), None);
        assert_eq!(stream.next(), None);
        drop(stream);
        assert_eq!(calls, 2);
    }

    #[test]
    fn infinite_generator() {
        let mut n = 0;
        let squares = stream::from_fn(|| {
            n += 1;
            Some(n * n)
        });

        assert_eq!(squares.limit(4).list(), [1, 4, 9, 16]);
    }
}
