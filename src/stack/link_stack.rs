use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
    rc::Rc,
};

use crate::link::{Link, LinkNodes, LinkStream};
use crate::stream::{JoinFormat, Stream, Streamable, Walkable};

use super::{Popping, Stack};

/// A mutable stack over a persistent chain of [`Link`]s.
///
/// The top of the stack is the head of the chain, so
/// [`stream()`](LinkStack::stream) yields the items from top to bottom.
///
/// # Equality
///
/// Two stacks are equal when they have the same length and the very same head
/// node, which is what a [`Clone`] or an untouched snapshot gives.
/// Stacks holding equal items in separately built chains are *not* equal:
///
/// ```
/// use pullstream::prelude::*;
///
/// let a: LinkStack<_> = [1, 2].into_iter().collect();
/// let b: LinkStack<_> = [1, 2].into_iter().collect();
///
/// assert_eq!(a, a.clone());
/// assert_ne!(a, b);
/// assert!(a.stream().zip(b.stream()).all(|(x, y)| x == y));
/// ```
pub struct LinkStack<T> {
    head: Option<Rc<Link<T>>>,
    len: usize,
}

impl<T> LinkStack<T> {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Creates a stack whose items are the chain starting at `head`.
    ///
    /// The chain is walked once to count it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let stack = LinkStack::from_head(Link::from_items([1, 2, 3]));
    ///
    /// assert_eq!(stack.len(), 3);
    /// assert_eq!(stack.peek(), Some(&1));
    /// ```
    pub fn from_head(head: Option<Rc<Link<T>>>) -> Self {
        let len = crate::link::stream(head.as_deref()).count();
        Self { head, len }
    }

    /// Returns the top node, shared with this stack.
    #[inline]
    pub fn head(&self) -> Option<&Rc<Link<T>>> {
        self.head.as_ref()
    }

    /// Returns the number of items on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no item.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Puts `item` on top of the stack. This is O(1).
    #[inline]
    pub fn push(&mut self, item: T) {
        self.head = Some(Link::new(item, self.head.take()));
        self.len += 1;
    }

    /// Returns the top item without removing it, or [`None`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(Link::item)
    }

    /// Returns the item `depth` positions below the top, `at(0)` being the top.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let stack: LinkStack<_> = ['a', 'b', 'c'].into_iter().collect();
    ///
    /// assert_eq!(stack.at(1), Some(&'b'));
    /// assert_eq!(stack.at(3), None);
    /// ```
    pub fn at(&self, depth: usize) -> Option<&T> {
        if depth >= self.len {
            return None;
        }
        self.stream().drop(depth).next()
    }

    /// Returns a stack of every item but the top one, sharing this stack's chain.
    ///
    /// The tail of an empty stack is empty. This is O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let stack: LinkStack<_> = [1, 2, 3].into_iter().collect();
    /// let tail = stack.tail();
    ///
    /// assert_eq!(tail.stream().copied().list(), [2, 3]);
    /// assert_eq!(stack.len(), 3);
    /// ```
    pub fn tail(&self) -> Self {
        match &self.head {
            Some(head) => Self {
                head: head.next().cloned(),
                len: self.len - 1,
            },
            None => Self::new(),
        }
    }

    /// Creates a stream over the items, from top to bottom.
    #[inline]
    pub fn stream(&self) -> LinkStream<'_, T> {
        crate::link::stream(self.head.as_deref())
    }

    /// Creates a stream over the nodes, from top to bottom.
    #[inline]
    pub fn nodes(&self) -> LinkNodes<'_, T> {
        LinkNodes::new(self.head.as_deref())
    }

    /// Creates a stream that pops this stack on each pull.
    ///
    /// See [`Stack::popping_stream()`].
    #[inline]
    pub fn popping_stream(&mut self) -> Popping<'_, Self, T>
    where
        T: Clone,
    {
        Popping::new(self)
    }
}

impl<T: Clone> LinkStack<T> {
    /// Removes and returns the top item, or [`None`] if the stack is empty.
    ///
    /// The item is moved out when no other stack shares the top node,
    /// and cloned otherwise. This is O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut stack: LinkStack<_> = [1, 2].into_iter().collect();
    /// let snapshot = stack.clone();
    ///
    /// assert_eq!(stack.pop(), Some(1));
    /// assert_eq!(stack.pop(), Some(2));
    /// assert_eq!(stack.pop(), None);
    /// assert_eq!(snapshot.len(), 2);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head.take()?;
        self.len -= 1;

        match Rc::try_unwrap(head) {
            Ok(link) => {
                let (item, next) = link.into_parts();
                self.head = next;
                Some(item)
            }
            Err(shared) => {
                self.head = shared.next().cloned();
                Some(shared.item().clone())
            }
        }
    }

    /// Pops items until at most `len` remain. Does nothing if the stack is
    /// already that small.
    pub fn truncate(&mut self, len: usize) {
        if self.len <= len {
            return;
        }

        log::trace!("truncating a stack of {} items to {len}", self.len);
        while self.len > len {
            if self.pop().is_none() {
                break;
            }
        }
    }
}

impl<T: Clone> Stack<T> for LinkStack<T> {
    #[inline]
    fn len(&self) -> usize {
        LinkStack::len(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        LinkStack::is_empty(self)
    }

    #[inline]
    fn push(&mut self, item: T) {
        LinkStack::push(self, item);
    }

    #[inline]
    fn peek(&self) -> Option<&T> {
        LinkStack::peek(self)
    }

    #[inline]
    fn pop(&mut self) -> Option<T> {
        LinkStack::pop(self)
    }

    #[inline]
    fn truncate(&mut self, len: usize) {
        LinkStack::truncate(self, len);
    }
}

impl<T> Streamable for LinkStack<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    type Stream<'a>
        = LinkStream<'a, T>
    where
        Self: 'a;

    #[inline]
    fn stream(&self) -> Self::Stream<'_> {
        LinkStack::stream(self)
    }
}

impl<T> Walkable for LinkStack<T> {}

impl<T> Default for LinkStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for LinkStack<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> PartialEq for LinkStack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && match (&self.head, &other.head) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<T> Eq for LinkStack<T> {}

impl<T> Hash for LinkStack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.head.as_ref().map(Rc::as_ptr).hash(state);
        self.len.hash(state);
    }
}

impl<T> FromIterator<T> for LinkStack<T> {
    /// Builds a stack whose top is the first item, so that its stream
    /// yields the items in their original order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let len = items.len();
        Self {
            head: Link::from_items(items),
            len,
        }
    }
}

impl<T: Debug> Debug for LinkStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stream().iter()).finish()
    }
}

impl<T: Display> Display for LinkStack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.stream().join_to_string(JoinFormat::new(), |item| item))
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, rc::Rc};

    use crate::prelude::*;

    #[test]
    fn push_pop_peek() {
        let mut stack = LinkStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.pop(), None);

        stack.push(1);
        stack.push(2);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek(), Some(&2));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn pop_moves_unique_items() {
        #[derive(Debug, PartialEq)]
        struct Token(u8);

        impl Clone for Token {
            fn clone(&self) -> Self {
                panic!("unexpected clone");
            }
        }

        let mut stack = LinkStack::new();
        stack.push(Token(1));
        assert_eq!(stack.pop(), Some(Token(1)));
    }

    #[test]
    fn pop_leaves_shared_chain_intact() {
        let mut stack: LinkStack<_> = [1, 2, 3].into_iter().collect();
        let snapshot = stack.clone();

        stack.truncate(1);

        assert_eq!(stack.stream().copied().list(), [3]);
        assert_eq!(snapshot.stream().copied().list(), [1, 2, 3]);
        assert_eq!(snapshot.len(), 3);
    }

    #[test]
    fn truncate_past_len_is_noop() {
        let mut stack: LinkStack<_> = [1, 2].into_iter().collect();
        let before = stack.clone();

        stack.truncate(5);
        assert_eq!(stack, before);

        stack.truncate(0);
        assert!(stack.is_empty());
    }

    #[test]
    fn at_depths() {
        let stack: LinkStack<_> = ['a', 'b', 'c'].into_iter().collect();

        assert_eq!(stack.at(0), stack.peek());
        assert_eq!(stack.at(2), Some(&'c'));
        assert_eq!(stack.at(3), None);
        assert_eq!(LinkStack::<char>::new().at(0), None);
    }

    #[test]
    fn tail_shares_chain() {
        let stack: LinkStack<_> = [1, 2, 3].into_iter().collect();
        let tail = stack.tail();

        assert_eq!(tail.len(), 2);
        assert!(Rc::ptr_eq(tail.head().unwrap(), stack.head().unwrap().next().unwrap()));
        assert_eq!(tail.tail().tail(), LinkStack::new());
        assert_eq!(LinkStack::<i32>::new().tail(), LinkStack::new());
    }

    #[test]
    fn equality_is_by_identity() {
        let a: LinkStack<_> = [1, 2].into_iter().collect();
        let b: LinkStack<_> = [1, 2].into_iter().collect();
        let mut c = a.clone();

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(LinkStack::<i32>::new(), LinkStack::new());

        c.push(0);
        assert_ne!(a, c);
        assert_eq!(c.tail(), a);
    }

    #[test]
    fn hash_agrees_with_equality() {
        let a: LinkStack<_> = [1, 2].into_iter().collect();
        let b: LinkStack<_> = [1, 2].into_iter().collect();

        let set: HashSet<_> = [a.clone(), a.clone(), b.clone(), a.tail(), b.tail()]
            .into_iter()
            .collect();

        assert_eq!(set.len(), 4);
        assert!(set.contains(&a));
        assert!(set.contains(&b.tail()));
    }

    #[test]
    fn from_head_counts_chain() {
        let chain = Link::from_items([1, 2, 3]);
        let a = LinkStack::from_head(chain.clone());
        let b = LinkStack::from_head(chain);

        assert_eq!(a.len(), 3);
        assert_eq!(a, b);
        assert_eq!(LinkStack::<i32>::from_head(None), LinkStack::new());
    }

    #[test]
    fn collects_in_stream_order() {
        let stack: LinkStack<_> = stream::of([1, 2, 3]).collect();

        assert_eq!(stack.stream().copied().list(), [1, 2, 3]);
        assert_eq!(stack.nodes().count(), 3);
    }

    #[test]
    fn formatting() {
        let stack: LinkStack<_> = [1, 2, 3].into_iter().collect();

        assert_eq!(format!("{stack:?}"), "[1, 2, 3]");
        assert_eq!(stack.to_string(), "1, 2, 3");
        assert_eq!(LinkStack::<i32>::new().to_string(), "");
    }

    #[test]
    fn deep_stack_drops() {
        let mut stack = LinkStack::new();
        for i in 0..200_000 {
            stack.push(i);
        }
        let shared = stack.tail();
        drop(stack);
        assert_eq!(shared.len(), 199_999);
    }

    #[test]
    fn generic_over_stack() {
        fn fill(stack: &mut impl Stack<u8>) {
            for i in 0..4 {
                stack.push(i);
            }
            stack.truncate(2);
        }

        let mut stack = LinkStack::new();
        fill(&mut stack);
        assert_eq!(stack.popping_stream().list(), [1, 0]);
    }
}

#[cfg(test)]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;
    use proptest::test_runner::TestCaseResult;

    use crate::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Push(i32),
        Pop,
        Truncate(usize),
        Snapshot,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i32>().prop_map(Op::Push),
            Just(Op::Pop),
            (0_usize..8).prop_map(Op::Truncate),
            Just(Op::Snapshot),
        ]
    }

    proptest! {
        #[test]
        fn behaves_like_vec(
            ops in propvec(op(), ..=32),
        ) {
            behaves_like_vec_impl(ops)?;
        }
    }

    fn behaves_like_vec_impl(ops: Vec<Op>) -> TestCaseResult {
        let mut stack = LinkStack::new();
        let mut model: Vec<i32> = vec![];
        let mut snapshots = vec![];

        for op in ops {
            match op {
                Op::Push(x) => {
                    stack.push(x);
                    model.push(x);
                }
                Op::Pop => prop_assert_eq!(stack.pop(), model.pop()),
                Op::Truncate(len) => {
                    stack.truncate(len);
                    model.truncate(len);
                }
                Op::Snapshot => snapshots.push((stack.clone(), model.clone())),
            }

            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.peek(), model.last());
        }

        // Later mutations never leak into earlier snapshots.
        for (snapshot, expected) in snapshots {
            let mut items = snapshot.stream().copied().list();
            items.reverse();
            prop_assert_eq!(items, expected);
        }
        Ok(())
    }
}
