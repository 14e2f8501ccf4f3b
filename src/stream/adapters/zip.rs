use crate::stream::{Stream, Walk};

/// A [`Stream`] that pulls two streams in lockstep, ending with the shorter one.
///
/// This `struct` is created by [`Stream::zip()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

impl<A, B> Zip<A, B> {
    pub(in crate::stream) fn new(a: A, b: B) -> Self {
        Self { a, b }
    }
}

impl<A, B> Stream for Zip<A, B>
where
    A: Stream,
    B: Stream,
{
    type Item = (A::Item, B::Item);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let a = self.a.next()?;
        let b = self.b.next()?;
        Some((a, b))
    }
}

// One finite side is enough to end the pairs.
impl<A: Walk, B: Stream> Walk for Zip<A, B> {}
