use std::fmt::Debug;

use crate::stream::Stream;

/// A [`Stream`] where each item is computed from the previous one.
///
/// This `struct` is created by [`transitive()`]. See its documentation for more.
#[derive(Clone)]
pub struct Transitive<T, F> {
    state: State<T>,
    f: F,
}

#[derive(Debug, Clone)]
enum State<T> {
    Seed(T),
    Last(T),
    Done,
}

/// Creates a [`Stream`] starting at `seed`, where each following item is computed
/// by `f` from the item before it.
///
/// The stream ends when `f` returns [`None`], and is infinite otherwise.
/// `f` only runs when the item it computes is pulled, so bounding the stream
/// with [`limit(n)`](Stream::limit) calls it at most `n - 1` times.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let powers = stream::transitive(1_u8, |&x| x.checked_mul(4)).list();
/// assert_eq!(powers, [1, 4, 16, 64]);
///
/// let naturals = stream::transitive(0, |&x| Some(x + 1));
/// assert_eq!(naturals.limit(3).list(), [0, 1, 2]);
/// ```
#[inline]
pub fn transitive<T, F>(seed: T, f: F) -> Transitive<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    Transitive {
        state: State::Seed(seed),
        f,
    }
}

impl<T, F> Stream for Transitive<T, F>
where
    T: Clone,
    F: FnMut(&T) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = match std::mem::replace(&mut self.state, State::Done) {
            State::Seed(seed) => seed,
            State::Last(last) => (self.f)(&last)?,
            State::Done => return None,
        };

        self.state = State::Last(item.clone());
        Some(item)
    }
}

impl<T: Debug, F> Debug for Transitive<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transitive")
            .field("state", &self.state)
            .finish()
    }
}
