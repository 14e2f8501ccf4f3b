use crate::error::NoSuchElement;
use crate::stream::Stream;

/// A view over a [`Stream`] that asks whether an item remains before taking it.
///
/// [`has_next()`](Cursor::has_next) pulls one item ahead and caches it,
/// so asking repeatedly never skips items.
///
/// This `struct` is created by [`Stream::cursor()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Cursor<S: Stream> {
    stream: S,
    peeked: Option<S::Item>,
}

impl<S: Stream> Cursor<S> {
    #[inline]
    pub(in crate::stream) fn new(stream: S) -> Self {
        Self {
            stream,
            peeked: None,
        }
    }

    /// Returns `true` if another item is available.
    pub fn has_next(&mut self) -> bool {
        if self.peeked.is_none() {
            self.peeked = self.stream.next();
        }
        self.peeked.is_some()
    }

    /// Takes the next item.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement`] if the stream has no item left.
    pub fn next(&mut self) -> Result<S::Item, NoSuchElement> {
        match self.peeked.take().or_else(|| self.stream.next()) {
            Some(item) => Ok(item),
            None => {
                log::debug!("cursor asked for an item past the end of its stream");
                Err(NoSuchElement)
            }
        }
    }

    /// Returns the underlying stream, with the cached item (if any) lost.
    pub fn into_inner(self) -> S {
        if self.peeked.is_some() {
            log::trace!("dropping the item cached by a cursor");
        }
        self.stream
    }
}
