use crate::stream::{PeekStream, Stream, Walk};

use super::Link;

/// A [`Stream`] over the items of a chain of [`Link`]s.
///
/// It peeks natively: the next item is read from the current node
/// without being pulled.
///
/// This `struct` is created by [`Link::stream()`] and [`stream()`].
/// See their documentation for more.
#[derive(Debug)]
pub struct LinkStream<'a, T> {
    node: Option<&'a Link<T>>,
    // Always the item of `node`, so that `peek` can lend it out.
    item: Option<&'a T>,
}

impl<'a, T> LinkStream<'a, T> {
    #[inline]
    pub(crate) fn new(node: Option<&'a Link<T>>) -> Self {
        Self {
            node,
            item: node.map(Link::item),
        }
    }
}

impl<'a, T> Stream for LinkStream<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        *self = Self::new(node.next().map(|next| &**next));
        Some(node.item())
    }
}

impl<'a, T> PeekStream for LinkStream<'a, T> {
    #[inline]
    fn peek(&mut self) -> Option<&&'a T> {
        self.item.as_ref()
    }
}

impl<T> Walk for LinkStream<'_, T> {}

impl<T> Clone for LinkStream<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LinkStream<'_, T> {}

/// A [`Stream`] over the nodes of a chain of [`Link`]s.
///
/// This `struct` is created by [`Link::nodes()`]. See its documentation for more.
#[derive(Debug)]
pub struct LinkNodes<'a, T> {
    node: Option<&'a Link<T>>,
}

impl<'a, T> LinkNodes<'a, T> {
    #[inline]
    pub(crate) fn new(node: Option<&'a Link<T>>) -> Self {
        Self { node }
    }
}

impl<'a, T> Stream for LinkNodes<'a, T> {
    type Item = &'a Link<T>;

    #[inline]
    fn next(&mut self) -> Option<&'a Link<T>> {
        let node = self.node?;
        self.node = node.next().map(|next| &**next);
        Some(node)
    }
}

impl<'a, T> PeekStream for LinkNodes<'a, T> {
    #[inline]
    fn peek(&mut self) -> Option<&&'a Link<T>> {
        self.node.as_ref()
    }
}

impl<T> Walk for LinkNodes<'_, T> {}

impl<T> Clone for LinkNodes<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for LinkNodes<'_, T> {}

/// Creates a stream over the items of a possibly empty chain.
///
/// # Examples
///
/// ```
/// use pullstream::{link, prelude::*};
///
/// let chain = Link::from_items([1, 2]);
/// assert_eq!(link::stream(chain.as_deref()).count(), 2);
///
/// let empty: Option<&Link<i32>> = None;
/// assert_eq!(link::stream(empty).next(), None);
/// ```
#[inline]
pub fn stream<T>(head: Option<&Link<T>>) -> LinkStream<'_, T> {
    LinkStream::new(head)
}

#[cfg(test)]
mod tests {
    use crate::link;
    use crate::prelude::*;
    use crate::test_utils::assert_stream_yields;

    #[test]
    fn streams_items_in_order() {
        let chain = Link::from_items([1, 2, 3]);
        assert_stream_yields(link::stream(chain.as_deref()).copied(), &[1, 2, 3]);
    }

    #[test]
    fn empty_chain() {
        assert_stream_yields(link::stream::<i32>(None), &[]);
    }

    #[test]
    fn peek_does_not_advance() {
        let chain = Link::from_items(['a', 'b']);
        let mut stream = link::stream(chain.as_deref());

        assert_eq!(stream.peek(), Some(&&'a'));
        assert_eq!(stream.peek(), Some(&&'a'));
        assert_eq!(stream.next(), Some(&'a'));
        assert_eq!(stream.peek(), Some(&&'b'));
        assert_eq!(stream.next(), Some(&'b'));
        assert_eq!(stream.peek(), None);
        assert_eq!(stream.next(), None);
    }

    #[test]
    fn nodes_follow_items() {
        let chain = Link::from_items([1, 2, 3]).unwrap();
        let mut nodes = chain.nodes();

        assert_eq!(nodes.peek().map(|node| *node.item()), Some(1));
        let items = nodes.map(|node| *node.item()).list();
        assert_eq!(items, [1, 2, 3]);
    }

    #[test]
    fn copies_restart_independently() {
        let chain = Link::from_items([1, 2]).unwrap();
        let mut first = chain.stream();
        let second = first;

        assert_eq!(first.next(), Some(&1));
        assert_eq!(second.copied().list(), [1, 2]);
    }
}
