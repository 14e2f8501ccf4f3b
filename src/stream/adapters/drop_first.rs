use crate::stream::{Stream, Walk};

/// A [`Stream`] that skips the first `n` items of the underlying stream.
///
/// This `struct` is created by [`Stream::drop()`]. See its documentation for more.
#[derive(Debug, Clone)]
pub struct DropFirst<S> {
    stream: S,
    remaining: usize,
}

impl<S> DropFirst<S> {
    pub(in crate::stream) fn new(stream: S, n: usize) -> Self {
        Self {
            stream,
            remaining: n,
        }
    }
}

impl<S: Stream> Stream for DropFirst<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            // Exhaustion is permanent, so giving up early loses nothing.
            if self.stream.next().is_none() {
                self.remaining = 0;
                return None;
            }
        }

        self.stream.next()
    }
}

impl<S: Walk> Walk for DropFirst<S> {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use crate::test_utils::{assert_stream_yields, test_stream};

    #[test]
    fn drop_zero_is_identity() {
        test_stream(|items| stream::of(items).drop(0));
    }

    #[test]
    fn drop_one_skips_head() {
        assert_stream_yields(stream::of([1, 2, 3]).drop(1), &[2, 3]);
    }

    #[test]
    fn drop_past_end() {
        assert_stream_yields(stream::of([1, 2, 3]).drop(3), &[]);
        assert_stream_yields(stream::of([1, 2, 3]).drop(10), &[]);
    }
}
