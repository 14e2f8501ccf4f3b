use itertools::EitherOrBoth;

use crate::stream::{Stream, Walk};

/// A [`Stream`] that pulls two streams in lockstep until both are exhausted,
/// yielding [`EitherOrBoth`] items.
///
/// This `struct` is created by [`Stream::zip_either()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct ZipEither<A, B> {
    a: A,
    b: B,
}

impl<A, B> ZipEither<A, B> {
    pub(in crate::stream) fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B> Stream for ZipEither<A, B>
where
    A: Stream,
    B: Stream,
{
    type Item = EitherOrBoth<A::Item, B::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match (self.a.next(), self.b.next()) {
            (Some(a), Some(b)) => Some(EitherOrBoth::Both(a, b)),
            (Some(a), None) => Some(EitherOrBoth::Left(a)),
            (None, Some(b)) => Some(EitherOrBoth::Right(b)),
            (None, None) => None,
        }
    }
}

impl<A: Walk, B: Walk> Walk for ZipEither<A, B> {}
