use super::Popping;

/// A last-in, first-out container.
///
/// Implementors provide the five primitive operations. [`truncate()`](Stack::truncate)
/// and [`popping_stream()`](Stack::popping_stream) are built on top of them.
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// fn drain_evens(stack: &mut impl Stack<i32>) -> Vec<i32> {
///     let mut evens = vec![];
///     while let Some(&top) = stack.peek() {
///         if top % 2 != 0 {
///             break;
///         }
///         evens.extend(stack.pop());
///     }
///     evens
/// }
///
/// let mut stack: LinkStack<_> = [2, 4, 5, 6].into_iter().collect();
///
/// assert_eq!(drain_evens(&mut stack), [2, 4]);
/// assert_eq!(stack.len(), 2);
/// ```
pub trait Stack<T> {
    /// Returns the number of items on the stack.
    fn len(&self) -> usize;

    /// Returns `true` if the stack holds no item.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Puts `item` on top of the stack.
    fn push(&mut self, item: T);

    /// Returns the top item without removing it, or [`None`] if the stack is empty.
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the top item, or [`None`] if the stack is empty.
    fn pop(&mut self) -> Option<T>;

    /// Pops items until at most `len` remain. Does nothing if the stack is
    /// already that small.
    fn truncate(&mut self, len: usize) {
        while self.len() > len {
            if self.pop().is_none() {
                break;
            }
        }
    }

    /// Creates a stream that pops the stack on each pull.
    ///
    /// Items pulled from the stream are gone from the stack; items not pulled
    /// stay. Peeking the stream peeks the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use pullstream::prelude::*;
    ///
    /// let mut stack: LinkStack<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(stack.popping_stream().limit(2).list(), [1, 2]);
    /// assert_eq!(stack.len(), 1);
    /// ```
    #[inline]
    fn popping_stream(&mut self) -> Popping<'_, Self, T>
    where
        Self: Sized,
    {
        Popping::new(self)
    }
}
