//! Module contains the [`Stream`] trait, its operators and its constructors.
//!
//! # Exhaustion
//!
//! A stream signals that it is over by returning [`None`] from [`Stream::next()`].
//! After that, every later call must return [`None`] as well.
//! Every stream and operator in this crate upholds this, and operators rely on it
//! from the streams they wrap. Streams built from outside sources, such as
//! [`of()`] over an arbitrary [`Iterator`] or [`from_fn()`] over a closure,
//! fuse themselves after their first [`None`].
//!
//! Pulling past the end is therefore never an error. The one place that fails loudly
//! is [`Cursor::next()`], which belongs to a view that promised an item was available.
//!
//! # Example
//!
//! ```
//! use pullstream::prelude::*;
//!
//! let words = stream::of(["a", "bb", "a", "ccc", "bb"])
//!     .distinct()
//!     .indexed()
//!     .map(|(i, word)| format!("{i}:{word}"))
//!     .join_to_string(JoinFormat::new().prefix("[").postfix("]"), |s| s);
//!
//! assert_eq!(words, "[0:a, 1:bb, 2:ccc]");
//! ```

mod adapters;
mod cursor;
mod iter;
mod join;
mod peek_stream;
mod sources;
#[allow(clippy::module_inception)]
mod stream;
mod streamable;
mod walk;

pub use adapters::*;
pub use cursor::*;
pub use iter::*;
pub use join::*;
pub use peek_stream::*;
pub use sources::*;
pub use stream::*;
pub use streamable::*;
pub use walk::*;

#[inline(always)]
pub(crate) const fn assert_stream<S>(stream: S) -> S
where
    S: Stream,
{
    stream
}
