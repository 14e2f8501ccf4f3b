use crate::stream::{PeekStream, Stream, Walk};

/// A [`Stream`] with a one-item lookahead.
///
/// This `struct` is created by [`Stream::peekable()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct Peekable<S: Stream> {
    stream: S,
    // `Some(None)` remembers that the underlying stream is exhausted.
    peeked: Option<Option<S::Item>>,
}

impl<S: Stream> Peekable<S> {
    pub(in crate::stream) fn new(stream: S) -> Self {
        Self {
            stream,
            peeked: None,
        }
    }
}

impl<S: Stream> Stream for Peekable<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.stream.next(),
        }
    }
}

impl<S: Stream> PeekStream for Peekable<S> {
    #[inline]
    fn peek(&mut self) -> Option<&Self::Item> {
        let stream = &mut self.stream;
        self.peeked.get_or_insert_with(|| stream.next()).as_ref()
    }
}

impl<S: Walk> Walk for Peekable<S> {}
