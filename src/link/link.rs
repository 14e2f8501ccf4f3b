use std::{fmt::Debug, rc::Rc};

use crate::stream::{Stream, Streamable, Walkable};

use super::{LinkNodes, LinkStream};

/// An immutable node of a singly linked chain.
///
/// A node holds one item and an optional shared pointer to the rest of the chain.
/// Nodes are only ever created, never modified, so chains are acyclic
/// and safe to share.
pub struct Link<T> {
    item: T,
    next: Next<T>,
}

/// The pointer from a node to the rest of its chain.
///
/// Dropping it unlinks the uniquely owned nodes behind it one by one,
/// so a long chain never drops recursively.
struct Next<T>(Option<Rc<Link<T>>>);

impl<T> Drop for Next<T> {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(node) = next {
            next = match Rc::try_unwrap(node) {
                Ok(mut link) => link.next.0.take(),
                Err(_) => None,
            };
        }
    }
}

impl<T> Link<T> {
    /// Creates a node holding `item` in front of the chain `next`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let chain = Link::new(1, Some(Link::new(2, None)));
    ///
    /// assert_eq!(*chain.item(), 1);
    /// assert_eq!(chain.stream().count(), 2);
    /// ```
    #[inline]
    pub fn new(item: T, next: Option<Rc<Link<T>>>) -> Rc<Self> {
        Rc::new(Self {
            item,
            next: Next(next),
        })
    }

    /// Builds a chain whose stream order is the order of `items`,
    /// or [`None`] if `items` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let chain = Link::from_items(['a', 'b', 'c']);
    /// assert_eq!(pullstream::link::stream(chain.as_deref()).copied().list(), ['a', 'b', 'c']);
    ///
    /// assert!(Link::from_items(Vec::<char>::new()).is_none());
    /// ```
    pub fn from_items<I>(items: I) -> Option<Rc<Self>>
    where
        I: IntoIterator,
        I::IntoIter: DoubleEndedIterator<Item = T>,
    {
        items
            .into_iter()
            .rfold(None, |next, item| Some(Self::new(item, next)))
    }

    /// Returns the item held by this node.
    #[inline]
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the rest of the chain, shared.
    #[inline]
    pub fn next(&self) -> Option<&Rc<Link<T>>> {
        self.next.0.as_ref()
    }

    /// Creates a stream over the items of the chain starting at this node.
    #[inline]
    pub fn stream(&self) -> LinkStream<'_, T> {
        LinkStream::new(Some(self))
    }

    /// Creates a stream over the nodes of the chain starting at this node.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let chain = Link::new(1, Some(Link::new(2, None)));
    /// let lasts = chain.nodes().map(|node| node.next().is_none()).list();
    ///
    /// assert_eq!(lasts, [false, true]);
    /// ```
    #[inline]
    pub fn nodes(&self) -> LinkNodes<'_, T> {
        LinkNodes::new(Some(self))
    }

    /// Takes the item and the rest of the chain out of this node.
    #[inline]
    pub(crate) fn into_parts(mut self) -> (T, Option<Rc<Link<T>>>) {
        let next = self.next.0.take();
        (self.item, next)
    }
}

impl<T> Streamable for Link<T> {
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
        Link::stream(self)
    }
}

impl<T> Walkable for Link<T> {}

impl<T: Debug> Debug for Link<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stream().iter()).finish()
    }
}
