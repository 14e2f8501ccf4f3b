use std::fmt::{Display, Write};

use crate::stream::Stream;

/// How [`Stream::join_to_string()`] renders a stream.
///
/// Built with [`new()`](JoinFormat::new) and refined with the other methods:
///
/// | Setting                                   | Default  |
/// |-------------------------------------------|----------|
/// | [`separator`](JoinFormat::separator)      | `", "`   |
/// | [`prefix`](JoinFormat::prefix)            | `""`     |
/// | [`postfix`](JoinFormat::postfix)          | `""`     |
/// | [`limit`](JoinFormat::limit)              | none     |
/// | [`truncated`](JoinFormat::truncated)      | `"..."`  |
///
/// # Examples
///
/// ```
/// use pullstream::prelude::*;
///
/// let format = JoinFormat::new().separator("; ").limit(1).truncated("etc.");
///
/// assert_eq!(stream::of([1, 2]).join_to_string(format, |x| x), "1; etc.");
/// assert_eq!(stream::of([1]).join_to_string(format, |x| x), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JoinFormat<'a> {
    separator: &'a str,
    prefix: &'a str,
    postfix: &'a str,
    limit: Option<usize>,
    truncated: &'a str,
}

impl<'a> JoinFormat<'a> {
    /// Creates the default format: items separated by `", "`, with no limit.
    #[inline]
    pub const fn new() -> Self {
        Self {
            separator: ", ",
            prefix: "",
            postfix: "",
            limit: None,
            truncated: "...",
        }
    }

    /// Sets the string written between two items.
    #[inline]
    pub const fn separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Sets the string written before the first item.
    #[inline]
    pub const fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets the string written after the last item (or the truncation marker).
    #[inline]
    pub const fn postfix(mut self, postfix: &'a str) -> Self {
        self.postfix = postfix;
        self
    }

    /// Renders at most `limit` items. If more remain, the truncation marker is written
    /// after a separator.
    #[inline]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the marker written in place of the items past the limit.
    #[inline]
    pub const fn truncated(mut self, truncated: &'a str) -> Self {
        self.truncated = truncated;
        self
    }

    pub(in crate::stream) fn join<S, D, F>(self, mut stream: S, mut transform: F) -> String
    where
        S: Stream,
        D: Display,
        F: FnMut(S::Item) -> D,
    {
        let mut out = String::from(self.prefix);
        let mut rendered = 0_usize;

        while let Some(item) = stream.next() {
            if self.limit.is_some_and(|limit| rendered >= limit) {
                if rendered > 0 {
                    out.push_str(self.separator);
                }
                out.push_str(self.truncated);
                // Drain the rest without rendering it.
                while stream.next().is_some() {}
                break;
            }

            if rendered > 0 {
                out.push_str(self.separator);
            }
            // A `String` accepts every write, so an error can only come from the
            // item's own `Display` impl. Its partial output is kept.
            if write!(out, "{}", transform(item)).is_err() {
                log::warn!("a `Display` impl failed while joining item {rendered}");
            }
            rendered += 1;
        }

        out.push_str(self.postfix);
        out
    }
}

impl Default for JoinFormat<'_> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn defaults() {
        assert_eq!(stream::of([1, 2, 3]).join_to_string(JoinFormat::default(), |x| x), "1, 2, 3");
        assert_eq!(stream::empty::<i32>().join_to_string(JoinFormat::new(), |x| x), "");
    }

    #[test]
    fn prefix_and_postfix_on_empty() {
        let format = JoinFormat::new().prefix("<").postfix(">");
        assert_eq!(stream::empty::<i32>().join_to_string(format, |x| x), "<>");
    }

    #[test]
    fn truncates_past_limit() {
        let format = JoinFormat::new().prefix("[").postfix("]").limit(2);

        assert_eq!(stream::of([1, 2, 3]).join_to_string(format, |x| x * 2), "[2, 4, ...]");
        assert_eq!(stream::of([1, 2]).join_to_string(format, |x| x * 2), "[2, 4]");
    }

    #[test]
    fn limit_zero() {
        let format = JoinFormat::new().limit(0);

        assert_eq!(stream::of([1]).join_to_string(format, |x| x), "...");
        assert_eq!(stream::empty::<i32>().join_to_string(format, |x| x), "");
    }

    #[test]
    fn truncated_items_are_pulled_but_not_rendered() {
        let mut pulled = 0;
        let mut rendered = 0;
        let s = stream::of(["a", "b", "c", "d"])
            .inspect(|_| pulled += 1)
            .join_to_string(JoinFormat::new().separator("").limit(1), |x| {
                rendered += 1;
                x
            });

        assert_eq!(s, "a...");
        assert_eq!(pulled, 4);
        assert_eq!(rendered, 1);
    }

    #[test]
    fn failing_display_does_not_stop_rendering() {
        /// Writes its number, but reports an error for even ones.
        struct Flaky(i32);

        impl std::fmt::Display for Flaky {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)?;
                if self.0 % 2 == 0 { Err(std::fmt::Error) } else { Ok(()) }
            }
        }

        let s = stream::of([1, 2, 3]).join_to_string(JoinFormat::new(), Flaky);
        assert_eq!(s, "1, 2, 3");
    }
}
