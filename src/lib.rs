//! Pull-based lazy streams, and the small collections that produce them.
//!
//! A [`Stream`] is a single-pass cursor over a (possibly infinite) sequence.
//! Its only required method, [`next`](Stream::next), either pulls the next item
//! or reports that the stream is over by returning [`None`].
//! Once a stream has returned [`None`], it keeps returning [`None`]:
//! a stream never "revives".
//!
//! Everything else is built on top of that single method:
//!
//! - Operators such as [`map`](Stream::map), [`filter`](Stream::filter),
//!   [`fmap`](Stream::fmap) or [`zip`](Stream::zip) wrap a stream into another one.
//!   They are lazy: nothing is pulled from the source until the result is pulled.
//! - Consumers such as [`foldl`](Stream::foldl), [`list`](Stream::list) or
//!   [`join_to_string`](Stream::join_to_string) drive the stream until it is exhausted.
//!
//! ```
//! use pullstream::prelude::*;
//!
//! let evens = stream::of(1..)
//!     .filter(|n| n % 2 == 0)
//!     .map(|n| n * 10)
//!     .limit(3)
//!     .list();
//!
//! assert_eq!(evens, [20, 40, 60]);
//! ```
//!
//! # Containers
//!
//! [`LinkStack`] is a mutable stack over a persistent, structurally shared
//! chain of [`Link`] nodes. Like every [`Streamable`] container, it hands out
//! stream views of its items:
//!
//! ```
//! use pullstream::prelude::*;
//!
//! let mut stack: LinkStack<_> = [1, 2, 3].into_iter().collect();
//! assert_eq!(stack.stream().copied().list(), [1, 2, 3]);
//!
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.peek(), Some(&2));
//! assert_eq!(stack.len(), 2);
//! ```
//!
//! # Features
//!
//! - `itertools`: adds consumers backed by the [`itertools`](https://docs.rs/itertools)
//!   crate, such as `Stream::min_max()`.
//!
//! [`Stream`]: stream::Stream
//! [`Streamable`]: stream::Streamable
//! [`LinkStack`]: stack::LinkStack
//! [`Link`]: link::Link

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod func;
pub mod link;
pub mod maybe;
pub mod prelude;
pub mod stack;
pub mod stream;
pub mod util;

#[cfg(test)]
mod test_utils;
