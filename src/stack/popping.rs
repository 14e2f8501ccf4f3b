use std::{fmt::Debug, marker::PhantomData};

use crate::stream::{PeekStream, Stream, Walk};

use super::Stack;

/// A [`Stream`] that pops a [`Stack`] on each pull.
///
/// This `struct` is created by [`Stack::popping_stream()`]. See its documentation for more.
pub struct Popping<'a, S: ?Sized, T> {
    stack: &'a mut S,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, S: ?Sized, T> Popping<'a, S, T> {
    #[inline]
    pub(super) fn new(stack: &'a mut S) -> Self {
        Self {
            stack,
            _marker: PhantomData,
        }
    }
}

impl<S, T> Stream for Popping<'_, S, T>
where
    S: Stack<T> + ?Sized,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.stack.pop()
    }
}

impl<S, T> PeekStream for Popping<'_, S, T>
where
    S: Stack<T> + ?Sized,
{
    #[inline]
    fn peek(&mut self) -> Option<&T> {
        self.stack.peek()
    }
}

// A stack holds finitely many items, unless pushed to while popped,
// which the borrow rules out.
impl<S, T> Walk for Popping<'_, S, T> where S: Stack<T> + ?Sized {}

impl<S: Debug + ?Sized, T> Debug for Popping<'_, S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popping")
            .field("stack", &self.stack)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn pops_in_lifo_order() {
        let mut stack = LinkStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.popping_stream().list(), [3, 2, 1]);
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_follows_stack() {
        let mut stack: LinkStack<_> = ["a", "b"].into_iter().collect();
        let mut popping = stack.popping_stream();

        assert_eq!(popping.peek(), Some(&"a"));
        assert_eq!(popping.next(), Some("a"));
        assert_eq!(popping.peek(), Some(&"b"));
        assert_eq!(popping.next(), Some("b"));
        assert_eq!(popping.peek(), None);
        assert_eq!(popping.next(), None);
    }

    #[test]
    fn partial_pull_keeps_rest() {
        let mut stack: LinkStack<_> = (1..=5).collect();

        let popped = stack.popping_stream().up_through(|&x| x == 2).list();

        assert_eq!(popped, [1, 2]);
        assert_eq!(stack.stream().copied().list(), [3, 4, 5]);
        assert_eq!(stack.len(), 3);
    }
}
